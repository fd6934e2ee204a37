//! Construction-time errors raised by the pagination and envelope primitives.
//!
//! These signal caller bugs (bad arguments, inconsistent state), not user-facing
//! conditions. At the request boundary they surface as a 500 envelope.

/// Errors raised while constructing a `Paginator` or an `Envelope`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A constructor or builder received an argument outside its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A derived value was requested before the inputs it needs were set.
    #[error("illegal state: {0}")]
    IllegalState(String),
}

impl CoreError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn illegal_state(msg: impl Into<String>) -> Self {
        Self::IllegalState(msg.into())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
