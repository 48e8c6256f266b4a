use crate::{misc::catch_outcome, Outcome, Try};

impl<T> Try<T> {
    /// Chain a dependent fallible step.
    ///
    /// `operation` returns any [`Outcome`] (another `Try`, a `Result` or an
    /// `Option`); its failure becomes the failure of the chain with the error
    /// unchanged, and a panic raised by `operation` is captured as well. A
    /// failure is passed through without calling `operation`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trymonad::Try;
    ///
    /// let port = Try::invoke(|| "8080")
    ///     .flat_map(|s| s.parse::<u16>())
    ///     .flat_map(|p| Try::invoke(move || p + 1));
    ///
    /// assert_eq!(Some(8081), port.ok());
    /// ```
    pub fn flat_map<O, R>(self, operation: O) -> Try<R::Ok>
    where
        O: FnOnce(T) -> R,
        R: Outcome,
    {
        match self {
            Self::Success(value) => catch_outcome(move || operation(value)).into(),
            Self::Failure(error) => Try::Failure(error),
        }
    }
}
