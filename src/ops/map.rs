use crate::Try;

impl<T> Try<T> {
    /// Transform the held value with `operation`.
    ///
    /// `operation` runs under the same fault capturing discipline as
    /// [`Try::invoke`]: a panic becomes a new failure. A failure is passed
    /// through with its error unchanged and `operation` is never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use trymonad::Try;
    ///
    /// let len = Try::invoke(|| "Kees").map(str::len);
    ///
    /// assert_eq!(Some(4), len.ok());
    /// ```
    pub fn map<O, U>(self, operation: O) -> Try<U>
    where
        O: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Try::invoke(move || operation(value)),
            Self::Failure(error) => Try::Failure(error),
        }
    }
}
