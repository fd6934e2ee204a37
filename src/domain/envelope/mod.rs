//! The uniform response envelope shared by every service.

pub mod builder;
pub mod status;

pub use builder::{normalize_type, Envelope, EnvelopeBuilder};
pub use status::Status;
