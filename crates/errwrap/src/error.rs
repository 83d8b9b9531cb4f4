//! The wrapping node and its constructors.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::CallSite;

type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// The error a [`WrappedError`] wraps: nothing, or a shared reference to any
/// error value (another `WrappedError` included).
///
/// Any `Error + Send + Sync + 'static` value converts into a `Cause` through
/// `From`, so `?`-style call sites never spell it out.
#[derive(Debug, Clone, Default)]
pub struct Cause(Option<SharedError>);

impl Cause {
    /// No underlying error; the node is the root of its chain.
    pub const fn none() -> Self {
        Self(None)
    }

    /// Keep an `Arc` the caller already holds. The node's `source()` will be
    /// the very same allocation.
    pub fn shared(err: SharedError) -> Self {
        Self(Some(err))
    }

    pub fn boxed(err: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self(Some(Arc::from(err)))
    }
}

impl<E> From<E> for Cause
where
    E: Error + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Self(Some(Arc::new(err)))
    }
}

/// One layer of a causal error chain.
///
/// Immutable once built. `Display` prints only this layer's message; use
/// [`stack`](crate::stack) or [`list_stacks`](crate::list_stacks) for the
/// whole chain.
#[derive(Debug, Clone)]
pub struct WrappedError {
    message: String,
    code: Option<i32>,
    cause: Option<SharedError>,
    site: CallSite,
}

impl WrappedError {
    /// Wrap `cause` without a status code.
    ///
    /// Usually reached through [`wrap!`](crate::wrap), which fills `site`
    /// with the caller's location.
    pub fn new(cause: impl Into<Cause>, message: impl Into<String>, site: CallSite) -> Self {
        Self {
            message: message.into(),
            code: None,
            cause: cause.into().0,
            site,
        }
    }

    /// Wrap `cause` and attach `code`. A zero code is treated as unset.
    pub fn with_code(
        cause: impl Into<Cause>,
        code: i32,
        message: impl Into<String>,
        site: CallSite,
    ) -> Self {
        Self {
            code: (code != 0).then_some(code),
            ..Self::new(cause, message, site)
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The code set on this layer only. See [`resolved_code`](Self::resolved_code)
    /// for the effective code of the chain.
    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn site(&self) -> CallSite {
        self.site
    }

    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Another handle on the cause, e.g. to log it independently.
    pub fn shared_cause(&self) -> Option<SharedError> {
        self.cause.clone()
    }

    /// This layer rendered as one trace entry:
    /// `<message>[ (<code>)] [<file>:<line> (<function>)]`.
    pub fn trace_line(&self) -> String {
        match self.code {
            Some(code) => format!("{} ({}) [{}]", self.message, code, self.site),
            None => format!("{} [{}]", self.message, self.site),
        }
    }

    /// First explicit code found walking from this layer inwards, or 0.
    pub fn resolved_code(&self) -> i32 {
        crate::code(Some(self))
    }

    pub fn stack(&self) -> String {
        crate::stack(Some(self))
    }

    pub fn list_stacks(&self) -> Vec<String> {
        crate::list_stacks(Some(self))
    }
}

impl fmt::Display for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for WrappedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

/// Build a [`WrappedError`] at the caller's location.
///
/// - `wrap!(message)` starts a chain (no cause).
/// - `wrap!(cause, message)` wraps `cause` without a code.
/// - `wrap!(cause, code, message)` wraps `cause` and sets `code`.
///
/// `cause` is anything that converts into a [`Cause`].
#[macro_export]
macro_rules! wrap {
    ($message:expr $(,)?) => {
        $crate::WrappedError::new($crate::Cause::none(), $message, $crate::callsite!())
    };
    ($cause:expr, $message:expr $(,)?) => {
        $crate::WrappedError::new($cause, $message, $crate::callsite!())
    };
    ($cause:expr, $code:expr, $message:expr $(,)?) => {
        $crate::WrappedError::with_code($cause, $code, $message, $crate::callsite!())
    };
}
