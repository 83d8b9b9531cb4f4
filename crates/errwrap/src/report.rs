//! Emitting a chain through `tracing`.

use std::error::Error;

use tracing::error;

use crate::{code_with, stack_with, TraceOptions};

/// Log `err` as a single `ERROR` event with its resolved `code` and full
/// `stack` attached as fields.
pub fn log(err: &(dyn Error + 'static)) {
    log_with(err, &TraceOptions::default());
}

pub fn log_with(err: &(dyn Error + 'static), options: &TraceOptions) {
    let code = code_with(Some(err), options);
    let stack = stack_with(Some(err), options);
    error!(code, stack = %stack, "{err}");
}
