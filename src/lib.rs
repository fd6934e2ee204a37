pub mod app;
pub mod domain;
pub mod infra;
pub mod support;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::responder::{ErrorResponder, ServiceError};
pub use domain::envelope::{Envelope, EnvelopeBuilder, Status};
pub use domain::errors::CoreError;
pub use domain::pagination::{PaginationProjection, PaginationView, Paginator};
pub use infra::config::ServiceInfo;
