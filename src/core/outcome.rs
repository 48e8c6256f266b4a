use crate::{Error, Result, Try};

/// Message of the error produced when an `Option` outcome holds no value.
pub const NO_VALUE_MESSAGE: &str = "no value present";

/// Anything that reports either a value or a failure.
///
/// Implemented for [`Try`], [`Result`](std::result::Result) and [`Option`], so closures passed to
/// [`Try::attempt`] and [`Try::flat_map`] can use whichever is most natural.
pub trait Outcome {
    type Ok;

    fn into_result(self) -> Result<Self::Ok>;
}

impl<T> Outcome for Option<T> {
    type Ok = T;

    fn into_result(self) -> Result<T> {
        self.ok_or_else(|| Error::msg(NO_VALUE_MESSAGE))
    }
}

impl<T, E> Outcome for ::std::result::Result<T, E>
where
    E: Into<Error>,
{
    type Ok = T;

    fn into_result(self) -> Result<T> {
        self.map_err(Into::into)
    }
}

impl<T> Outcome for Try<T> {
    type Ok = T;

    fn into_result(self) -> Result<T> {
        match self {
            Try::Success(value) => Ok(value),
            Try::Failure(error) => Err(error),
        }
    }
}
