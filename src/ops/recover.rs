use std::error::Error as StdError;

use crate::{Error, ErrorKind, Try};

impl<T> Try<T> {
    /// Turn a failure back into a success by computing a substitute value
    /// from the captured error.
    ///
    /// If `operation` panics, the result is a failure holding the new fault;
    /// the original error is dropped. A success is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use trymonad::Try;
    ///
    /// let name = Try::<&str>::invoke(|| panic!("lookup failed")).recover(|_| "Jaap");
    ///
    /// assert_eq!(Some("Jaap"), name.ok());
    /// ```
    pub fn recover<O>(self, operation: O) -> Self
    where
        O: FnOnce(Error) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => {
                log_trace!(kind = ?error.kind(), "recovering from failure");

                Self::invoke(move || operation(error))
            }
        }
    }

    /// Like [`recover`](Try::recover), but only for failures whose error is
    /// of type `E`.
    ///
    /// Any other failure is returned unchanged, so several calls can be
    /// chained from the most specific to the most general handler; the first
    /// matching handler wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use trymonad::{Try, TryError};
    ///
    /// let name = Try::<&str>::fail("unknown employee {0}", &[&7])
    ///     .recover_from::<std::num::ParseIntError, _>(|_| "Jan")
    ///     .recover_from::<TryError, _>(|_| "Jaap")
    ///     .recover(|_| "Hans");
    ///
    /// assert_eq!(Some("Jaap"), name.ok());
    /// ```
    pub fn recover_from<E, O>(self, operation: O) -> Self
    where
        E: StdError + 'static,
        O: FnOnce(&E) -> T,
    {
        let error = match self {
            Self::Success(value) => return Self::Success(value),
            Self::Failure(error) => error,
        };

        match error.downcast_ref::<E>() {
            Some(e) => {
                log_trace!(expected = std::any::type_name::<E>(), "recovering from matching failure");

                Self::invoke(move || operation(e))
            }
            None => {
                log_trace!(expected = std::any::type_name::<E>(), error = %error, "skipping recovery");

                Self::Failure(error)
            }
        }
    }

    /// Like [`recover`](Try::recover), but only for failures of the given
    /// [`ErrorKind`].
    pub fn recover_kind<O>(self, kind: ErrorKind, operation: O) -> Self
    where
        O: FnOnce(Error) -> T,
    {
        match self {
            Self::Failure(error) if error.kind() == kind => Self::Failure(error).recover(operation),
            this => this,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::ParseIntError;

    use crate::{Error, ErrorKind, Panic, Try, TryError};

    fn broken() -> Try<String> {
        Try::invoke(|| panic!("null reference"))
    }

    fn domain() -> Try<String> {
        Try::fail("employee {0} is invalid", &[&"Kees"])
    }

    #[test]
    fn test_recover() {
        let x = broken().recover(|_| "Jaap".to_owned());

        assert_eq!(Some("Jaap".to_owned()), x.ok());
    }

    #[test]
    fn test_recover_receives_error() {
        let x = domain().recover(|e| e.to_string());

        assert_eq!(Some("employee Kees is invalid".to_owned()), x.ok());
    }

    #[test]
    fn test_recover_on_success() {
        let mut called = false;
        let x = Try::success(1).recover(|_| {
            called = true;

            2
        });

        assert!(!called);
        assert_eq!(Some(1), x.ok());
    }

    #[test]
    fn test_recover_panic_replaces_error() {
        let x = domain().recover(|_| panic!("the fix is broken too"));

        let err = x.err().unwrap();

        assert_eq!(ErrorKind::Panic, err.kind());
        assert_eq!("the fix is broken too", err.downcast_ref::<Panic>().unwrap().message());
    }

    #[test]
    fn test_recover_from_matching() {
        let x = domain()
            .recover_from::<TryError, _>(|e| format!("fixed: {}", e.message()))
            .recover(|_| "Jan".to_owned());

        assert_eq!(Some("fixed: employee Kees is invalid".to_owned()), x.ok());
    }

    #[test]
    fn test_recover_from_skips_other() {
        let x = broken()
            .recover_from::<TryError, _>(|_| "Jaap".to_owned())
            .recover(|_| "Jan".to_owned());

        assert_eq!(Some("Jan".to_owned()), x.ok());
    }

    #[test]
    fn test_recover_from_first_match_wins() {
        let x = Try::<u16>::attempt(|| "x".parse::<u16>())
            .recover_from::<TryError, _>(|_| 1)
            .recover_from::<ParseIntError, _>(|_| 2)
            .recover_from::<ParseIntError, _>(|_| 3)
            .recover(|_| 4);

        assert_eq!(Some(2), x.ok());
    }

    #[test]
    fn test_recover_from_unmatched_keeps_error() {
        let failure = broken();
        let error = failure.error().unwrap().clone();

        let x = failure.recover_from::<TryError, _>(|_| "Jaap".to_owned());

        assert!(x.error().unwrap().ptr_eq(&error));
    }

    #[test]
    fn test_recover_from_panic_replaces_error() {
        let x = domain().recover_from::<TryError, _>(|_| panic!("typed fix is broken"));

        let err = x.err().unwrap();

        assert_eq!(ErrorKind::Panic, err.kind());
        assert!(!err.is::<TryError>());
        assert_eq!("typed fix is broken", err.downcast_ref::<Panic>().unwrap().message());
    }

    #[test]
    fn test_recover_kind_panic_replaces_error() {
        let x = domain().recover_kind(ErrorKind::Domain, |_| panic!("kind fix is broken"));

        let err = x.err().unwrap();

        assert_eq!(ErrorKind::Panic, err.kind());
        assert!(!err.is::<TryError>());
        assert_eq!("kind fix is broken", err.downcast_ref::<Panic>().unwrap().message());
    }

    #[test]
    fn test_recover_kind() {
        let x = broken()
            .recover_kind(ErrorKind::Domain, |_| "domain".to_owned())
            .recover_kind(ErrorKind::Panic, |_| "panic".to_owned());
        let y = domain().recover_kind(ErrorKind::External, |_| "external".to_owned());

        assert_eq!(Some("panic".to_owned()), x.ok());
        assert!(y.error().unwrap().is::<TryError>());
    }

    #[test]
    fn test_recover_maps_error() {
        let x = Try::<u8>::failure(Error::msg("plain")).recover(|e| e.to_string().len() as u8);

        assert_eq!(Some(5), x.ok());
    }
}
