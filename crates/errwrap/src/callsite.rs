//! Call-site capture.
//!
//! Rust has no runtime caller introspection that includes the enclosing
//! function, so the location is taken at compile time by the [`callsite!`]
//! macro, expanded inside the caller's own body.

use std::fmt;

/// Where a [`WrappedError`](crate::WrappedError) was constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    function: &'static str,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self { file, line, function }
    }

    /// Source file, as reported by `file!()`.
    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Fully-qualified path of the enclosing function, e.g. `samples::service::load_profile`.
    pub fn function(&self) -> &'static str {
        self.function
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.file, self.line, self.function)
    }
}

#[doc(hidden)]
pub fn __type_name_of<T>(_: &T) -> &'static str {
    std::any::type_name::<T>()
}

/// Turn the type name of the probe item declared by [`function_name!`] into
/// the path of the function that declared it.
#[doc(hidden)]
pub fn __enclosing_function(probe: &'static str) -> &'static str {
    let mut name = probe.strip_suffix("::__probe").unwrap_or(probe);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Fully-qualified path of the function this macro is expanded in.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __probe() {}
        $crate::callsite::__enclosing_function($crate::callsite::__type_name_of(&__probe))
    }};
}

/// Capture the caller's file, line and enclosing function as a [`CallSite`].
#[macro_export]
macro_rules! callsite {
    () => {
        $crate::CallSite::new(file!(), line!(), $crate::function_name!())
    };
}
