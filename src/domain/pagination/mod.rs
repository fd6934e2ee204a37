//! Pagination arithmetic for list endpoints and its serialized projection.

pub mod paginator;
pub mod view;

pub use paginator::Paginator;
pub use view::{PaginationProjection, PaginationView};
