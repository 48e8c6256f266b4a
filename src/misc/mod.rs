#[macro_use]
mod log;

mod catch;

pub mod format;

pub use catch::{catch, catch_outcome, raise};
