#[macro_use]
mod misc;

mod core;
mod ops;

pub use self::core::{
    Error, ErrorKind, Outcome, Panic, Result, Try, TryError, FILTER_MESSAGE, NO_VALUE_MESSAGE,
};
