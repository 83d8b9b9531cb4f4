//! Status code resolution.

use std::error::Error;

use crate::{chain_with, TraceOptions, WrappedError};

/// Effective status code of `err`: the code of the outermost
/// [`WrappedError`] in the chain that set one explicitly, or 0.
///
/// Foreign errors are walked through, not stopped at, so a code set below
/// an `io::Error` wrapped by a thiserror variant is still found.
pub fn code(err: Option<&(dyn Error + 'static)>) -> i32 {
    code_with(err, &TraceOptions::default())
}

pub fn code_with(err: Option<&(dyn Error + 'static)>, options: &TraceOptions) -> i32 {
    let Some(err) = err else {
        return 0;
    };
    chain_with(err, options.max_depth)
        .filter_map(|e| e.downcast_ref::<WrappedError>())
        .find_map(WrappedError::code)
        .unwrap_or(0)
}
