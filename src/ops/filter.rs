use crate::{misc::catch, Error, Try, FILTER_MESSAGE};

impl<T> Try<T> {
    /// Keep a success only if `predicate` holds for its value.
    ///
    /// A rejecting or panicking predicate turns the success into a failure
    /// holding a [`TryError`](crate::TryError). A failure is returned
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use trymonad::Try;
    ///
    /// let name = Try::invoke(|| "Frits").filter(|s| *s == "Kees").get_or_else("Hans");
    ///
    /// assert_eq!("Hans", name);
    /// ```
    pub fn filter<O>(self, predicate: O) -> Self
    where
        O: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => match catch(|| predicate(&value)) {
                Ok(true) => Self::Success(value),
                Ok(false) => {
                    log_trace!("predicate rejected value");

                    Self::Failure(Error::msg(FILTER_MESSAGE))
                }
                Err(_) => Self::Failure(Error::msg(FILTER_MESSAGE)),
            },
            Self::Failure(error) => Self::Failure(error),
        }
    }
}
