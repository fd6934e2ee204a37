//! Small formatting helpers shared by service handlers.

pub mod dates;
pub mod strings;

pub use dates::validate_date;
pub use strings::{pad_trim, PadMode};
