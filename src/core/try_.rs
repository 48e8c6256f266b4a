use std::fmt::Display;

use crate::misc::{catch, catch_outcome};

use super::{Error, Outcome, Result, TryError};

/// Outcome of a computation that either produced a value or failed.
///
/// A `Try` is created by running a computation through [`Try::invoke`] (or
/// [`Try::attempt`]): a panic raised by the computation is captured as a
/// [`Failure`](Try::Failure) instead of unwinding into the caller. Every
/// combinator that runs caller supplied code applies the same discipline, so
/// a chain of combinators never panics. Only [`Try::unwrap`] re-raises the
/// captured error, and [`Try::get`] hands it back as an `Err`.
///
/// # Panics and the panic hook
///
/// Capturing relies on unwinding. The process panic hook still runs for every
/// captured panic, so the default hook prints a `thread '..' panicked at ..`
/// line to stderr even though the fault ends up in a `Failure`. Errors
/// re-raised by [`Try::unwrap`] carry an [`Error`] payload, which the default
/// hook prints as `Box<dyn Any>`. Install a custom hook with
/// [`std::panic::set_hook`] to silence or reformat these messages.
///
/// With `panic = "abort"` in the build profile nothing can be captured: the
/// first panic inside a combinator aborts the process.
///
/// # Examples
///
/// ```
/// use trymonad::Try;
///
/// let ends_with_s = Try::invoke(|| "Kees")
///     .map(|name| name.ends_with('s'))
///     .get()
///     .unwrap();
///
/// assert!(ends_with_s);
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub enum Try<T> {
    /// Holds the value of a computation that completed normally.
    Success(T),

    /// Holds the error of a computation that failed.
    Failure(Error),
}

impl<T> Try<T> {
    /// Run `operation` once and capture its outcome.
    ///
    /// Returns [`Success`](Try::Success) with the produced value, or
    /// [`Failure`](Try::Failure) if `operation` panicked.
    pub fn invoke<F>(operation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        catch(operation).into()
    }

    /// Run `operation` once and capture its outcome, where `operation` may
    /// also report a failure through its return value.
    ///
    /// # Examples
    ///
    /// ```
    /// use trymonad::Try;
    ///
    /// let port = Try::attempt(|| "80a".parse::<u16>());
    ///
    /// assert!(port.is_failure());
    /// ```
    pub fn attempt<F, R>(operation: F) -> Self
    where
        F: FnOnce() -> R,
        R: Outcome<Ok = T>,
    {
        catch_outcome(operation).into()
    }

    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    pub fn failure<E>(error: E) -> Self
    where
        E: Into<Error>,
    {
        Self::Failure(error.into())
    }

    /// Failure holding a [`TryError`] built from `template` and `args`.
    ///
    /// See [`TryError::format`] for the placeholder syntax.
    pub fn fail(template: &str, args: &[&dyn Display]) -> Self {
        Self::Failure(Error::new(TryError::format(template, args)))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the captured error, if any.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into an `Option` of the value, discarding the error.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into an `Option` of the error, discarding the value.
    pub fn err(self) -> Option<Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows the value; a failure is cloned, which shares the error.
    pub fn as_ref(&self) -> Try<&T> {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(error) => Try::Failure(error.clone()),
        }
    }

    pub fn into_result(self) -> Result<T> {
        Outcome::into_result(self)
    }
}

impl<T, E> From<::std::result::Result<T, E>> for Try<T>
where
    E: Into<Error>,
{
    fn from(result: ::std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error.into()),
        }
    }
}

impl<T> From<Try<T>> for Result<T> {
    fn from(t: Try<T>) -> Self {
        t.into_result()
    }
}
