//! Human-readable traces of a causal chain.

use std::error::Error;

use crate::{chain_with, TraceOptions, WrappedError};

/// Render the chain of `err`, one line per layer, outermost first.
///
/// Each [`WrappedError`] line reads `<message>[ (<code>)] [<file>:<line> (<function>)]`
/// and is indented with one more tab than the layer wrapping it. The first
/// foreign error reached is printed as its own `Display` text and ends the
/// trace. `None` renders as the empty string.
pub fn stack(err: Option<&(dyn Error + 'static)>) -> String {
    stack_with(err, &TraceOptions::default())
}

pub fn stack_with(err: Option<&(dyn Error + 'static)>, options: &TraceOptions) -> String {
    let Some(err) = err else {
        return String::new();
    };

    let mut lines = Vec::new();
    for (depth, e) in chain_with(err, options.max_depth).enumerate() {
        let indent = "\t".repeat(depth);
        match e.downcast_ref::<WrappedError>() {
            Some(node) => lines.push(format!("{indent}{}", node.trace_line())),
            None => {
                lines.push(format!("{indent}{e}"));
                break;
            }
        }
    }
    lines.join("\n")
}

/// One entry per [`WrappedError`] layer, outermost first, without indentation.
///
/// Stops at the first foreign error, which is not listed itself.
pub fn list_stacks(err: Option<&(dyn Error + 'static)>) -> Vec<String> {
    list_stacks_with(err, &TraceOptions::default())
}

pub fn list_stacks_with(err: Option<&(dyn Error + 'static)>, options: &TraceOptions) -> Vec<String> {
    let Some(err) = err else {
        return Vec::new();
    };
    chain_with(err, options.max_depth)
        .map_while(|e| e.downcast_ref::<WrappedError>())
        .map(WrappedError::trace_line)
        .collect()
}
