pub mod envelope;
pub mod errors;
pub mod pagination;

pub use envelope::{Envelope, EnvelopeBuilder, Status};
pub use errors::{CoreError, CoreResult};
pub use pagination::{PaginationProjection, PaginationView, Paginator};
