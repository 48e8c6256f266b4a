use crate::{misc::catch, Try};

impl<T> Try<T> {
    /// Mutate the held value in place with `operation`.
    ///
    /// Returns the success holding the mutated value, or a failure holding the
    /// fault if `operation` panics; the partially mutated value is dropped in
    /// that case. On a failure `operation` is not called, so once one step of
    /// a `set` chain fails, the remaining steps are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use trymonad::Try;
    ///
    /// let v = Try::invoke(Vec::new).set(|v| v.push(1)).set(|v| v.push(2));
    ///
    /// assert_eq!(Some(vec![1, 2]), v.ok());
    /// ```
    pub fn set<O>(self, operation: O) -> Self
    where
        O: FnOnce(&mut T),
    {
        match self {
            Self::Success(mut value) => match catch(|| operation(&mut value)) {
                Ok(()) => Self::Success(value),
                Err(error) => Self::Failure(error),
            },
            Self::Failure(error) => Self::Failure(error),
        }
    }
}
