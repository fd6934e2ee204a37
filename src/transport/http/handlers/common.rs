//! Helpers shared by list/detail handlers built on top of this crate.

use crate::app::responder::ServiceError;
use crate::domain::envelope::{Envelope, Status};
use crate::transport::http::types::{AppState, PageQuery};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Wraps an extractor rejection so the responder reports it with the
/// rejection's own status code and text.
pub fn rejection(err: JsonRejection) -> ServiceError {
    ServiceError::Generic(err.into())
}

pub fn query_rejection(err: QueryRejection) -> ServiceError {
    ServiceError::Generic(err.into())
}

/// Renders `error` through the state's responder (honors redaction).
pub fn error_response(state: &AppState, error: ServiceError) -> Response {
    state.responder.respond_to(&error).into_response()
}

/// `200 ok` envelope for a single page of `items` out of `total`.
///
/// `total` and `items` come from the data-access layer, which has already
/// applied `paginator.offset()` / `per_page` to its query.
pub fn paginated<T: Serialize>(
    state: &AppState,
    query: PageQuery,
    kind: &str,
    total: u64,
    items: &[T],
) -> Result<Envelope, ServiceError> {
    let paginator = query.paginator(total)?;
    state
        .builder
        .build_paginated(&paginator, kind, items, 200, Status::Ok, "")
        .map_err(Into::into)
}
