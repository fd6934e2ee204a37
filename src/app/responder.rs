//! Converts caught errors into failure envelopes.
//!
//! Classification walks the whole `anyhow` cause chain and picks the
//! highest-priority recognized shape:
//! 1. HTTP status errors (including axum body/query rejections)
//! 2. resource not found
//! 3. validation failures
//!
//! Anything else is a generic 500.

use crate::domain::envelope::{Envelope, EnvelopeBuilder, Status};
use crate::domain::errors::CoreError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use serde_json::Value as JsonValue;
use std::error::Error as StdError;

/// Request-time errors a handler may raise deliberately.
#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    /// An explicit HTTP status, with an optional message.
    #[error("HTTP {status}{}", detail_suffix(.message))]
    Http { status: u16, message: Option<String> },
    /// A lookup for a resource of the given type found nothing.
    #[error("{resource} not found")]
    ResourceNotFound { resource: String },
    /// Input failed validation; `errors` is passed through to `data.errors`.
    #[error("{message}")]
    Validation { message: String, errors: JsonValue },
    #[error(transparent)]
    Generic(#[from] anyhow::Error),
}

impl ServiceError {
    pub fn http(status: u16) -> Self {
        Self::Http {
            status,
            message: None,
        }
    }

    pub fn http_with_message(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: Some(message.into()),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            resource: resource.into(),
        }
    }

    /// Not-found error named after the short type name of `T`.
    pub fn not_found_for<T: ?Sized>() -> Self {
        Self::not_found(short_type_name::<T>())
    }

    pub fn validation(message: impl Into<String>, errors: JsonValue) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
        }
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        Self::Generic(err.into())
    }
}

/// The shape a caught error was recognized as.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    HttpStatus { status: u16, message: Option<String> },
    ResourceNotFound { resource: String },
    Validation { message: String, errors: JsonValue },
    Generic,
}

impl ErrorKind {
    fn priority(&self) -> u8 {
        match self {
            ErrorKind::HttpStatus { .. } => 0,
            ErrorKind::ResourceNotFound { .. } => 1,
            ErrorKind::Validation { .. } => 2,
            ErrorKind::Generic => 3,
        }
    }
}

/// Classifies an error by inspecting every cause in its chain.
///
/// `ServiceError`s attached with `.context(..)` are found through anyhow's
/// downcast, which walks nested context layers; when several layers carry a
/// `ServiceError`, only the outermost one is considered.
pub fn classify(error: &anyhow::Error) -> ErrorKind {
    // context values never appear as themselves in `chain()`
    let outer = error
        .downcast_ref::<ServiceError>()
        .and_then(recognize_service_error);

    outer
        .into_iter()
        .chain(error.chain().filter_map(recognize))
        .min_by_key(ErrorKind::priority)
        .unwrap_or(ErrorKind::Generic)
}

fn classify_service_error(error: &ServiceError) -> ErrorKind {
    recognize_service_error(error).unwrap_or(ErrorKind::Generic)
}

fn recognize_service_error(error: &ServiceError) -> Option<ErrorKind> {
    match error {
        ServiceError::Http { status, message } => Some(ErrorKind::HttpStatus {
            status: *status,
            message: message.clone(),
        }),
        ServiceError::ResourceNotFound { resource } => Some(ErrorKind::ResourceNotFound {
            resource: resource.clone(),
        }),
        ServiceError::Validation { message, errors } => Some(ErrorKind::Validation {
            message: message.clone(),
            errors: errors.clone(),
        }),
        ServiceError::Generic(inner) => match classify(inner) {
            ErrorKind::Generic => None,
            kind => Some(kind),
        },
    }
}

fn recognize(cause: &(dyn StdError + 'static)) -> Option<ErrorKind> {
    if let Some(err) = cause.downcast_ref::<ServiceError>() {
        return recognize_service_error(err);
    }
    if let Some(rejection) = cause.downcast_ref::<JsonRejection>() {
        return Some(ErrorKind::HttpStatus {
            status: rejection.status().as_u16(),
            message: Some(rejection.body_text()),
        });
    }
    if let Some(rejection) = cause.downcast_ref::<QueryRejection>() {
        return Some(ErrorKind::HttpStatus {
            status: rejection.status().as_u16(),
            message: Some(rejection.body_text()),
        });
    }
    None
}

/// Standard reason phrase for `status`, or an empty string for unknown codes.
pub fn status_text(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("")
}

/// Turns errors into failure envelopes. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorResponder {
    builder: EnvelopeBuilder,
    redact_internal_errors: bool,
}

impl ErrorResponder {
    pub fn new(builder: EnvelopeBuilder) -> Self {
        Self {
            builder,
            redact_internal_errors: false,
        }
    }

    /// Replace the raw text of generic failures with the 500 reason phrase.
    pub fn with_redaction(mut self, redact: bool) -> Self {
        self.redact_internal_errors = redact;
        self
    }

    /// Whether `error` matches one of the recognized (non-generic) shapes.
    pub fn is_recognized(&self, error: &anyhow::Error) -> bool {
        classify(error) != ErrorKind::Generic
    }

    pub fn respond(&self, error: &anyhow::Error) -> Envelope {
        let kind = classify(error);
        if kind == ErrorKind::Generic {
            tracing::error!(error = ?error, "unhandled error while serving request");
        }
        self.render(kind, || error.to_string())
    }

    pub fn respond_to(&self, error: &ServiceError) -> Envelope {
        let kind = classify_service_error(error);
        if kind == ErrorKind::Generic {
            tracing::error!(error = ?error, "unhandled error while serving request");
        }
        self.render(kind, || error.to_string())
    }

    /// Same envelope as [`respond_to`](Self::respond_to), without logging.
    pub fn envelope_for(&self, error: &ServiceError) -> Envelope {
        self.render(classify_service_error(error), || error.to_string())
    }

    fn render(&self, kind: ErrorKind, generic_message: impl FnOnce() -> String) -> Envelope {
        match kind {
            ErrorKind::HttpStatus { status, message } => {
                let message = match message {
                    Some(m) if !m.is_empty() => m,
                    _ => status_text(status).to_string(),
                };
                tracing::debug!(status, %message, "http status error");
                Envelope::bare(status, Status::Fail, message)
            }
            ErrorKind::ResourceNotFound { resource } => {
                tracing::debug!(%resource, "resource not found");
                Envelope::bare(404, Status::Fail, format!("{} not found", resource))
            }
            ErrorKind::Validation { message, errors } => {
                tracing::debug!(%message, "validation failed");
                self.builder
                    .build("errors", &errors, 422, Status::Fail, message.clone())
                    .unwrap_or_else(|_| Envelope::bare(422, Status::Fail, message))
            }
            ErrorKind::Generic => {
                let message = if self.redact_internal_errors {
                    status_text(500).to_string()
                } else {
                    generic_message()
                };
                Envelope::bare(500, Status::Fail, message)
            }
        }
    }
}

fn detail_suffix(message: &Option<String>) -> String {
    match message.as_deref() {
        Some(m) if !m.is_empty() => format!(": {}", m),
        _ => String::new(),
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Context};
    use serde_json::json;

    struct Example;

    #[test]
    fn http_error_without_message_uses_reason_phrase() {
        let envelope = ErrorResponder::default().respond(&ServiceError::http(404).into());
        assert_eq!(envelope, Envelope::bare(404, "fail", "Not Found"));
    }

    #[test]
    fn http_error_keeps_its_own_message() {
        let err = ServiceError::http_with_message(403, "token expired").into();
        let envelope = ErrorResponder::default().respond(&err);
        assert_eq!(envelope.code, 403);
        assert_eq!(envelope.message, "token expired");
    }

    #[test]
    fn not_found_uses_short_type_name() {
        let envelope = ErrorResponder::default().respond(&ServiceError::not_found_for::<Example>().into());
        assert_eq!(envelope, Envelope::bare(404, "fail", "Example not found"));
    }

    #[test]
    fn validation_errors_land_in_data_errors() {
        let errors = json!({"email": ["The email field is required."]});
        let err = ServiceError::validation("", errors.clone()).into();
        let envelope = ErrorResponder::default().respond(&err);

        assert_eq!(envelope.code, 422);
        assert_eq!(envelope.status, "fail");
        assert_eq!(envelope.message, "");
        assert_eq!(envelope.collection("errors"), Some(&json!([errors])));
    }

    #[test]
    fn generic_errors_become_500_with_their_message() {
        let envelope = ErrorResponder::default().respond(&anyhow!("database exploded"));
        assert_eq!(envelope, Envelope::bare(500, "fail", "database exploded"));

        let envelope = ErrorResponder::default().respond(&anyhow!(""));
        assert_eq!(envelope.message, "");
    }

    #[test]
    fn redaction_hides_generic_messages_only() {
        let responder = ErrorResponder::default().with_redaction(true);
        assert_eq!(
            responder.respond(&anyhow!("secret dsn")).message,
            "Internal Server Error"
        );
        assert_eq!(
            responder.respond(&ServiceError::not_found("Order").into()).message,
            "Order not found"
        );
    }

    #[test]
    fn context_wrapped_errors_are_still_recognized() {
        let err = anyhow::Error::from(ServiceError::not_found("Order")).context("loading order 7");
        assert_eq!(
            classify(&err),
            ErrorKind::ResourceNotFound {
                resource: "Order".to_string()
            }
        );

        let res: anyhow::Result<()> = Err(ServiceError::http(401)).context("checking token");
        let err = res.unwrap_err();
        assert_eq!(ErrorResponder::default().respond(&err).message, "Unauthorized");
    }

    #[test]
    fn http_status_wins_over_other_shapes() {
        let err = anyhow::Error::from(ServiceError::not_found("Order"))
            .context(ServiceError::http(410));
        assert_eq!(ErrorResponder::default().respond(&err).code, 410);
    }

    #[test]
    fn service_error_in_a_middle_context_layer_is_recognized() {
        let err = anyhow::Error::from(ServiceError::not_found("Order"))
            .context(ServiceError::http(410))
            .context("outer");
        assert_eq!(
            classify(&err),
            ErrorKind::HttpStatus {
                status: 410,
                message: None
            }
        );

        let err = anyhow!("socket closed")
            .context(ServiceError::not_found("Invoice"))
            .context("loading invoice")
            .context("rendering page");
        assert_eq!(
            ErrorResponder::default().respond(&err).message,
            "Invoice not found"
        );
    }

    #[test]
    fn http_error_display_keeps_message() {
        assert_eq!(
            ServiceError::http_with_message(403, "token expired").to_string(),
            "HTTP 403: token expired"
        );
        assert_eq!(ServiceError::http(404).to_string(), "HTTP 404");
        assert_eq!(ServiceError::http_with_message(404, "").to_string(), "HTTP 404");
    }

    #[test]
    fn recognizes_only_specific_shapes() {
        let responder = ErrorResponder::default();
        assert!(responder.is_recognized(&ServiceError::not_found("Example").into()));
        assert!(responder.is_recognized(&ServiceError::http(503).into()));
        assert!(responder.is_recognized(&ServiceError::validation("bad", json!({})).into()));
        assert!(!responder.is_recognized(&anyhow!("mass assignment")));
        assert!(!responder.is_recognized(&ServiceError::from(anyhow!("boom")).into()));
        assert!(!responder.is_recognized(
            &CoreError::invalid_argument("no type").into()
        ));
    }

    #[test]
    fn core_errors_are_generic_failures() {
        let err = ServiceError::from(CoreError::invalid_argument("no type specified"));
        let envelope = ErrorResponder::default().respond_to(&err);
        assert_eq!(envelope.code, 500);
        assert_eq!(envelope.message, "invalid argument: no type specified");
    }

    #[test]
    fn reason_phrase_table_covers_common_codes() {
        assert_eq!(status_text(400), "Bad Request");
        assert_eq!(status_text(401), "Unauthorized");
        assert_eq!(status_text(403), "Forbidden");
        assert_eq!(status_text(404), "Not Found");
        assert_eq!(status_text(422), "Unprocessable Entity");
        assert_eq!(status_text(500), "Internal Server Error");
        assert_eq!(status_text(503), "Service Unavailable");
        assert_eq!(status_text(42), "");
    }
}
