//! Tuning knobs for chain walks.

/// Default upper bound on the number of errors visited in one walk.
///
/// Chains built from [`WrappedError`](crate::WrappedError) are acyclic, but a
/// foreign `source()` implementation may loop back on itself.
pub const MAX_DEPTH: usize = 64;

/// Options shared by [`code_with`](crate::code_with),
/// [`stack_with`](crate::stack_with) and [`list_stacks_with`](crate::list_stacks_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceOptions {
    /// Maximum number of errors (outermost included) a walk will visit.
    /// Never below 1, so the outermost error is always seen.
    pub(crate) max_depth: usize,
}

impl TraceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the depth bound. Zero is raised to 1.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    pub fn depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self { max_depth: MAX_DEPTH }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{code_with, list_stacks_with, stack_with, wrap};

    #[test]
    fn default_uses_max_depth_constant() {
        assert_eq!(TraceOptions::default().depth(), MAX_DEPTH);
    }

    #[test]
    fn builder_overrides_depth() {
        assert_eq!(TraceOptions::new().max_depth(3).depth(), 3);
    }

    #[test]
    fn zero_depth_is_raised_to_one() {
        let options = TraceOptions::new().max_depth(0);
        assert_eq!(options.depth(), 1);

        let err = wrap!(wrap!("error from database"), 409, "repository error");
        assert_eq!(code_with(Some(&err), &options), 409);
        assert_eq!(list_stacks_with(Some(&err), &options).len(), 1);
        assert!(stack_with(Some(&err), &options).starts_with("repository error (409)"));
    }
}
