use crate::{
    misc::{catch_outcome, raise},
    Result, Try,
};

impl<T> Try<T> {
    /// Returns the held value, or the captured error as `Err`.
    ///
    /// This is where a failure becomes visible to the caller again; combine
    /// it with `?` to propagate the error.
    pub fn get(self) -> Result<T> {
        self.into_result()
    }

    /// Returns the held value, re-raising the captured error otherwise.
    ///
    /// Inside a closure passed to [`Try::invoke`] or one of the combinators,
    /// the raised error is captured again unchanged, which makes this the way
    /// to re-surface a nested `Try`.
    ///
    /// # Panics
    ///
    /// Panics with the captured [`Error`](crate::Error) as payload if `self` is a failure.
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => raise(error),
        }
    }

    /// Returns the held value, or `T::default()` for a failure.
    pub fn get_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    /// Returns the held value, or `other` for a failure.
    pub fn get_or_else(self, other: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => other,
        }
    }

    /// On failure replace `self` by the `Try` produced by `supplier`.
    ///
    /// `supplier` runs lazily and may fail itself; a panic raised by it
    /// becomes the new failure. A success is returned unchanged.
    pub fn or_else<O>(self, supplier: O) -> Self
    where
        O: FnOnce() -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => catch_outcome(supplier).into(),
        }
    }
}
