pub mod responder;

pub use responder::{classify, status_text, ErrorKind, ErrorResponder, ServiceError};
