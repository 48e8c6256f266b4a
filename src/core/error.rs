use std::any::TypeId;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;

use thiserror::Error as ThisError;

use crate::misc::format;

/// Message of the error produced by a rejecting or panicking filter predicate.
pub const FILTER_MESSAGE: &str = "There are no results from applying the predicate";

/* ErrorKind */

/// Category of a captured [`Error`].
///
/// Used by [`Try::recover_kind`](crate::Try::recover_kind) to select which
/// failures a recovery handler is responsible for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A panic raised by user code and caught by the library.
    Panic,

    /// A [`TryError`] constructed by the library or by the caller.
    Domain,

    /// Any other error converted into an [`Error`].
    External,
}

/* Error */

/// Opaque, immutable error held by a failed [`Try`](crate::Try).
///
/// Cloning an `Error` is cheap and shares the underlying error value, so the
/// same failure can be propagated through any number of combinators without
/// losing its identity.
#[derive(Clone)]
pub struct Error {
    kind: ErrorKind,
    inner: Arc<dyn StdError + Send + Sync + 'static>,
}

impl Error {
    /// Wrap `error`, deriving its kind from its concrete type.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let kind = if TypeId::of::<E>() == TypeId::of::<Panic>() {
            ErrorKind::Panic
        } else if TypeId::of::<E>() == TypeId::of::<TryError>() {
            ErrorKind::Domain
        } else {
            ErrorKind::External
        };

        Self {
            kind,
            inner: Arc::new(error),
        }
    }

    /// Shortcut for wrapping a [`TryError`] with the given message.
    pub fn msg<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self::new(TryError::new(message))
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns `true` if the wrapped error is of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.inner.is::<E>()
    }

    /// Returns a reference to the wrapped error if it is of type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// The lower-level source of the wrapped error, if any.
    pub fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }

    /// The shared captured error, keeping its concrete type for downcasting.
    pub fn into_inner(self) -> Arc<dyn StdError + Send + Sync + 'static> {
        self.inner
    }

    /// Returns `true` if both values share the same captured error.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<E> From<E> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

/// Boxes the captured error for callers working with
/// `Box<dyn std::error::Error>`.
///
/// The box holds a wrapper around the shared error, so downcasting the box
/// itself does not reach the captured type. The captured error is available
/// as the box's [`source`](StdError::source); use [`Error::into_inner`] to
/// downcast directly.
impl From<Error> for Box<dyn StdError + Send + Sync + 'static> {
    fn from(error: Error) -> Self {
        Box::new(Shared(error.inner))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.inner, f)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("inner", &self.inner)
            .finish()
    }
}

/* Shared */

struct Shared(Arc<dyn StdError + Send + Sync + 'static>);

impl Debug for Shared {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.0, f)
    }
}

impl Display for Shared {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.0, f)
    }
}

impl StdError for Shared {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.0)
    }
}

/* TryError */

/// Domain error carrying a formatted message.
///
/// Used for explicit failures constructed by callers and for the failure
/// produced by [`Try::filter`](crate::Try::filter).
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{message}")]
pub struct TryError {
    message: String,
}

impl TryError {
    pub fn new<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
        }
    }

    /// Build the message from `template`, replacing every positional
    /// placeholder `{n}` with the `n`-th element of `args`.
    ///
    /// `{{` and `}}` produce literal braces. Placeholders that are malformed
    /// or reference a missing argument are kept as written.
    ///
    /// # Examples
    ///
    /// ```
    /// use trymonad::TryError;
    ///
    /// let err = TryError::format("employee {0} not found in {1}", &[&"Kees", &42]);
    ///
    /// assert_eq!(err.message(), "employee Kees not found in 42");
    /// ```
    pub fn format(template: &str, args: &[&dyn Display]) -> Self {
        Self {
            message: format::positional(template, args),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/* Panic */

/// Error captured from a panic raised by user code.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("panicked: {message}")]
pub struct Panic {
    message: String,
}

impl Panic {
    pub fn new<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, ThisError)]
    #[error("disk on fire")]
    struct DiskError;

    #[test]
    fn test_kind_follows_concrete_type() {
        assert_eq!(ErrorKind::Panic, Error::new(Panic::new("boom")).kind());
        assert_eq!(ErrorKind::Domain, Error::msg("nope").kind());
        assert_eq!(ErrorKind::External, Error::from(DiskError).kind());
    }

    #[test]
    fn test_downcast_keeps_identity() {
        let err = Error::from(DiskError);

        assert!(err.is::<DiskError>());
        assert!(!err.is::<TryError>());
        assert!(err.downcast_ref::<DiskError>().is_some());
        assert_eq!("disk on fire", err.to_string());
    }

    #[test]
    fn test_clones_share_the_error() {
        let a = Error::msg("shared");
        let b = a.clone();

        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&Error::msg("shared")));
    }

    #[derive(Debug, ThisError)]
    #[error("cannot store employee")]
    struct StoreError {
        #[source]
        cause: DiskError,
    }

    #[test]
    fn test_boxes_into_std_error() {
        let boxed: Box<dyn StdError + Send + Sync> = Error::msg("boxed").into();

        assert_eq!("boxed", boxed.to_string());

        let inner = boxed.source().unwrap();

        assert_eq!(
            "boxed",
            inner.downcast_ref::<TryError>().unwrap().message()
        );
    }

    #[test]
    fn test_into_inner_keeps_identity() {
        let inner = Error::msg("inner").into_inner();

        assert_eq!(
            "inner",
            inner.downcast_ref::<TryError>().unwrap().message()
        );
    }

    #[test]
    fn test_source() {
        let err = Error::from(StoreError { cause: DiskError });

        assert!(err.source().unwrap().is::<DiskError>());
        assert!(Error::msg("no cause").source().is_none());
    }

    #[test]
    fn test_format_substitutes_positions() {
        let err = TryError::format("{1} before {0}", &[&"b", &"a"]);

        assert_eq!("a before b", err.message());
        assert_eq!("a before b", err.to_string());
    }
}
