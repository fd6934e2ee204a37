//! Construction of the `{status, code, message, data, pagination}` response envelope.

use crate::domain::envelope::Status;
use crate::domain::errors::{CoreError, CoreResult};
use crate::domain::pagination::{PaginationProjection, PaginationView, Paginator};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use utoipa::ToSchema;

/// Canonical success/failure response body shared by every service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Envelope {
    /// Short status token, conventionally `ok` or `fail`.
    pub status: String,
    /// HTTP status code the envelope is sent with.
    pub code: u16,
    #[serde(default)]
    pub message: String,
    /// `{ "<collection>": [items...] }`, omitted when there is no payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<Map<String, JsonValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationProjection>,
}

impl Envelope {
    /// An envelope without payload.
    pub fn bare(code: u16, status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            code,
            message: message.into(),
            data: None,
            pagination: None,
        }
    }

    /// Items stored under `data.<collection>`, looked up by the normalized name.
    pub fn collection(&self, kind: &str) -> Option<&JsonValue> {
        self.data.as_ref()?.get(&normalize_type(kind))
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok.as_str()
    }
}

/// Builds envelopes from a collection name and a payload.
///
/// Stateless; handlers hold one by value and share it freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeBuilder;

impl EnvelopeBuilder {
    pub fn new() -> Self {
        Self
    }

    /// `200 ok` envelope with an empty message.
    pub fn ok<T>(&self, kind: &str, payload: &T) -> CoreResult<Envelope>
    where
        T: Serialize + ?Sized,
    {
        self.build(kind, payload, 200, Status::Ok, "")
    }

    /// Builds an envelope.
    ///
    /// The payload is stored under `data.<normalized kind>` and is always
    /// sequence-shaped: arrays are kept as-is, anything else is wrapped in a
    /// one-element array. `null`, `[]` and `{}` count as no payload, in which
    /// case `data` is omitted.
    ///
    /// Fails with `InvalidArgument` when a payload is given without a kind, or
    /// when the payload cannot be serialized.
    pub fn build<T>(
        &self,
        kind: &str,
        payload: &T,
        code: u16,
        status: impl Into<String>,
        message: impl Into<String>,
    ) -> CoreResult<Envelope>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(payload).map_err(|e| {
            CoreError::invalid_argument(format!("cannot serialize response payload: {}", e))
        })?;

        let mut envelope = Envelope::bare(code, status, message);
        if is_empty_payload(&value) {
            return Ok(envelope);
        }

        if kind.is_empty() {
            return Err(CoreError::invalid_argument(
                "cannot prepare response: no type specified",
            ));
        }

        let items = match value {
            JsonValue::Array(_) => value,
            other => JsonValue::Array(vec![other]),
        };

        let mut data = Map::new();
        data.insert(normalize_type(kind), items);
        envelope.data = Some(data);
        Ok(envelope)
    }

    /// Same as [`build`](Self::build), plus the `pagination` projection of
    /// the paginator's current values.
    pub fn build_paginated<T>(
        &self,
        paginator: &Paginator,
        kind: &str,
        payload: &T,
        code: u16,
        status: impl Into<String>,
        message: impl Into<String>,
    ) -> CoreResult<Envelope>
    where
        T: Serialize + ?Sized,
    {
        let mut envelope = self.build(kind, payload, code, status, message)?;
        envelope.pagination = Some(PaginationView::snapshot(paginator).projection());
        Ok(envelope)
    }
}

/// Lowercases `kind` and collapses every run of characters outside
/// `[A-Za-z]` into a single underscore.
pub fn normalize_type(kind: &str) -> String {
    let mut normalized = String::with_capacity(kind.len());
    let mut in_run = false;

    for c in kind.to_lowercase().chars() {
        if c.is_ascii_alphabetic() {
            normalized.push(c);
            in_run = false;
        } else if !in_run {
            normalized.push('_');
            in_run = true;
        }
    }

    normalized
}

fn is_empty_payload(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Array(items) => items.is_empty(),
        JsonValue::Object(fields) => fields.is_empty(),
        _ => false,
    }
}
