use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::{Error, Outcome, Panic, Result, TryError};

/// Run `operation` once and convert a panic raised by it into an [`Error`].
///
/// A panic carrying an [`Error`] as payload (see [`raise`]) is restored as
/// that exact error; a [`Panic`] or [`TryError`] payload is wrapped as is.
pub fn catch<F, U>(operation: F) -> Result<U>
where
    F: FnOnce() -> U,
{
    panic::catch_unwind(AssertUnwindSafe(operation)).map_err(|payload| {
        let error = from_payload(payload);

        log_debug!(kind = ?error.kind(), error = %error, "captured fault");

        error
    })
}

/// Like [`catch`], but `operation` may also report a failure through the
/// [`Outcome`] it returns.
pub fn catch_outcome<F, R>(operation: F) -> Result<R::Ok>
where
    F: FnOnce() -> R,
    R: Outcome,
{
    catch(operation).and_then(Outcome::into_result)
}

/// Re-raise `error` as a panic that [`catch`] turns back into `error`.
pub fn raise(error: Error) -> ! {
    log_debug!(kind = ?error.kind(), error = %error, "raising captured error");

    panic::panic_any(error)
}

fn from_payload(payload: Box<dyn Any + Send>) -> Error {
    let payload = match payload.downcast::<Error>() {
        Ok(error) => return *error,
        Err(payload) => payload,
    };

    let payload = match payload.downcast::<Panic>() {
        Ok(panic) => return Error::new(*panic),
        Err(payload) => payload,
    };

    let payload = match payload.downcast::<TryError>() {
        Ok(error) => return Error::new(*error),
        Err(payload) => payload,
    };

    let payload = match payload.downcast::<String>() {
        Ok(message) => return Error::new(Panic::new(*message)),
        Err(payload) => payload,
    };

    match payload.downcast_ref::<&'static str>() {
        Some(message) => Error::new(Panic::new(*message)),
        None => Error::new(Panic::new("Box<dyn Any>")),
    }
}
