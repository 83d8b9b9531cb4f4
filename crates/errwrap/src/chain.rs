//! Chain protocol: walking from an error to its causes.
//!
//! The only capability used is `std::error::Error::source`, so chains mixing
//! [`WrappedError`](crate::WrappedError) layers, thiserror enums, `io::Error`
//! and anything else are walked the same way.

use std::error::Error;

use crate::MAX_DEPTH;

/// The immediate cause of `err`, unchanged.
pub fn unwrap<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a (dyn Error + 'static)> {
    err.source()
}

/// Iterator over an error and its causes, outermost first.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
    remaining: usize,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = current.source();
        Some(current)
    }
}

/// Walk `err` and its causes, visiting at most [`MAX_DEPTH`] errors.
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    chain_with(err, MAX_DEPTH)
}

pub fn chain_with<'a>(err: &'a (dyn Error + 'static), max_depth: usize) -> Chain<'a> {
    Chain {
        next: Some(err),
        remaining: max_depth,
    }
}

/// Whether `target` is `err` itself or anywhere in its chain.
///
/// Compared by data address only: a struct and an error stored at offset 0
/// inside it share an address and match each other. Use [`is_instance`]
/// when the concrete type is known.
pub fn is(err: &(dyn Error + 'static), target: &(dyn Error + 'static)) -> bool {
    let target = target as *const dyn Error as *const ();
    chain(err).any(|e| std::ptr::eq(e as *const dyn Error as *const (), target))
}

/// Whether `target` itself, matched by both type and address, is in the chain.
pub fn is_instance<T>(err: &(dyn Error + 'static), target: &T) -> bool
where
    T: Error + 'static,
{
    chain(err).any(|e| e.downcast_ref::<T>().is_some_and(|e| std::ptr::eq(e, target)))
}

/// Whether an error equal to `target` appears in the chain. Suited to
/// sentinel-style error enums.
pub fn is_eq<T>(err: &(dyn Error + 'static), target: &T) -> bool
where
    T: Error + PartialEq + 'static,
{
    chain(err).any(|e| e.downcast_ref::<T>() == Some(target))
}

/// First error of type `T` in the chain.
pub fn find<'a, T>(err: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    chain(err).find_map(|e| e.downcast_ref::<T>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{wrap, Cause, WrappedError};
    use std::fmt;
    use std::sync::Arc;

    #[derive(Debug, thiserror::Error)]
    #[error("{inner}")]
    struct TestErrorType {
        inner: String,
    }

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum Sentinel {
        #[error("not found")]
        NotFound,
        #[error("conflict")]
        Conflict,
    }

    /// A broken error whose `source()` points back at itself.
    #[derive(Debug)]
    struct Looping;

    impl fmt::Display for Looping {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("looping")
        }
    }

    impl Error for Looping {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&LOOPING)
        }
    }

    static LOOPING: Looping = Looping;

    #[test]
    fn unwrap_returns_the_cause() {
        let foo: Arc<dyn Error + Send + Sync> = Arc::new(TestErrorType { inner: "foo err".into() });
        let err = wrap!(Cause::shared(foo.clone()), "layer 1 failed");

        let unwrapped = unwrap(&err).expect("cause present");
        assert!(is(unwrapped, &*foo));
    }

    #[test]
    fn unwrap_of_root_is_none() {
        let err = wrap!("root");
        assert!(unwrap(&err).is_none());
    }

    #[test]
    fn is_matches_across_nestings() {
        let foo: Arc<dyn Error + Send + Sync> = Arc::new(TestErrorType { inner: "foo err".into() });
        let bar = TestErrorType { inner: "bar err".into() };

        let err = wrap!(Cause::shared(foo.clone()), "layer 1 failed");
        let err = wrap!(err, "layer 2 failed");

        assert!(is(&err, &*foo));
        assert!(!is(&err, &bar));
    }

    #[test]
    fn is_matches_the_error_itself() {
        let err = wrap!("root");
        assert!(is(&err, &err));
    }

    #[test]
    fn is_eq_finds_sentinels() {
        let err = wrap!(wrap!(Sentinel::NotFound, "lookup"), "handler");
        assert!(is_eq(&err, &Sentinel::NotFound));
        assert!(!is_eq(&err, &Sentinel::Conflict));
    }

    #[test]
    fn find_binds_typed_cause_across_nestings() {
        let err = wrap!(TestErrorType { inner: "foo err".into() }, "layer 1 failed");
        let err = wrap!(err, "layer 2 failed");

        let target = find::<TestErrorType>(&err).expect("typed cause in chain");
        assert_eq!(target.inner, "foo err");
    }

    #[test]
    fn find_binds_wrapped_layers_too() {
        let err = wrap!(wrap!("inner"), 409, "middle");
        let err = wrap!(err, "outer");

        let first = find::<WrappedError>(&err).unwrap();
        assert_eq!(first.message(), "outer");
    }

    #[test]
    fn chain_yields_outermost_first() {
        let err = wrap!(wrap!(Sentinel::Conflict, "l1"), "l2");
        let messages: Vec<String> = chain(&err).map(|e| e.to_string()).collect();
        assert_eq!(messages, vec!["l2", "l1", "conflict"]);
    }

    #[test]
    fn chain_is_bounded_on_cycles() {
        let err = wrap!(Looping, "outer");
        assert_eq!(chain(&err).count(), MAX_DEPTH);
        assert_eq!(chain_with(&err, 5).count(), 5);
    }

    #[test]
    fn code_on_cyclic_chain_stops_at_first_explicit_code() {
        let err = wrap!(Looping, 409, "outer");
        assert_eq!(crate::code(Some(&err)), 409);
    }

    #[test]
    fn code_on_cyclic_chain_without_codes_terminates() {
        let err = wrap!(Looping, "outer");
        assert_eq!(crate::code(Some(&err)), 0);
    }

    #[test]
    fn stack_and_listing_on_cyclic_chain_terminate() {
        let err = wrap!(Looping, "outer");

        let trace = crate::stack(Some(&err));
        assert_eq!(trace.lines().count(), 2);
        assert_eq!(trace.lines().last(), Some("\tlooping"));
        assert_eq!(crate::list_stacks(Some(&err)).len(), 1);
    }

    #[derive(Debug, thiserror::Error)]
    #[error("outer")]
    struct Holder {
        inner: TestErrorType,
    }

    #[test]
    fn is_instance_checks_type_and_address() {
        let err = wrap!(
            Holder { inner: TestErrorType { inner: "held".into() } },
            "layer 1 failed"
        );
        let holder = find::<Holder>(&err).unwrap();

        assert!(is_instance(&err, holder));
        assert!(!is_instance(&err, &holder.inner));
        assert!(!is_instance(&err, &Holder { inner: TestErrorType { inner: "held".into() } }));
    }

    #[test]
    fn anyhow_walks_through_wrapped_layers() {
        let err = wrap!(Sentinel::Conflict, 409, "repository error");
        let err = wrap!(err, "service error");
        let any = anyhow::Error::from(err);

        let messages: Vec<String> = any.chain().map(|e| e.to_string()).collect();
        assert_eq!(messages, vec!["service error", "repository error", "conflict"]);

        let sentinel = any.chain().find_map(|e| e.downcast_ref::<Sentinel>());
        assert_eq!(sentinel, Some(&Sentinel::Conflict));
        assert_eq!(any.downcast_ref::<WrappedError>().unwrap().message(), "service error");
        assert_eq!(crate::code(Some(&*any)), 409);
    }
}
