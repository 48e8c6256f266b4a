mod error;
mod outcome;
mod try_;

pub use error::{Error, ErrorKind, Panic, TryError, FILTER_MESSAGE};
pub use outcome::{Outcome, NO_VALUE_MESSAGE};
pub use try_::Try;

/// Result type whose error is a captured [`Error`].
pub type Result<T> = ::std::result::Result<T, Error>;
