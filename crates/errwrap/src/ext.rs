//! Wrapping errors straight off a `Result`.

use crate::{CallSite, Cause, WrappedError};

/// Map the error of a `Result` into a new [`WrappedError`] layer.
///
/// ```rust,ignore
/// use errwrap::{callsite, ResultExt};
///
/// let user = repository::fetch_user(&store, id).wrap_err(callsite!(), "service failed")?;
/// ```
pub trait ResultExt<T> {
    fn wrap_err(self, site: CallSite, message: impl Into<String>) -> Result<T, WrappedError>;

    fn wrap_err_code(
        self,
        site: CallSite,
        code: i32,
        message: impl Into<String>,
    ) -> Result<T, WrappedError>;

    /// Like [`wrap_err`](Self::wrap_err), building the message only on failure.
    fn wrap_err_with<F>(self, site: CallSite, message: F) -> Result<T, WrappedError>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Cause>,
{
    fn wrap_err(self, site: CallSite, message: impl Into<String>) -> Result<T, WrappedError> {
        self.map_err(|e| WrappedError::new(e, message, site))
    }

    fn wrap_err_code(
        self,
        site: CallSite,
        code: i32,
        message: impl Into<String>,
    ) -> Result<T, WrappedError> {
        self.map_err(|e| WrappedError::with_code(e, code, message, site))
    }

    fn wrap_err_with<F>(self, site: CallSite, message: F) -> Result<T, WrappedError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| WrappedError::new(e, message(), site))
    }
}
