//! `errwrap` crate: contextual error wrapping for layered code.
//!
//! Each layer (repository → service → controller, say) wraps the failure it
//! received in a [`WrappedError`] carrying its own message, an optional
//! status code and the call-site it was built at. The result stays a plain
//! `std::error::Error`, so generic chain inspection keeps working.
//!
//! ```rust,ignore
//! use errwrap::{wrap, code, stack};
//!
//! let repo = wrap!(db_err, 409, "repository error");
//! let service = wrap!(repo, "service error");
//!
//! assert_eq!(code(Some(&service)), 409);
//! println!("{}", stack(Some(&service)));
//! ```
//!
//! Only [`WrappedError`]'s own message is shown by `Display`; the full trace
//! is opt-in through [`stack`] and [`list_stacks`].

pub mod callsite;
pub mod chain;
pub mod code;
pub mod error;
pub mod ext;
pub mod options;
pub mod report;
pub mod stack;

pub use callsite::CallSite;
pub use chain::{chain, chain_with, find, is, is_eq, is_instance, unwrap, Chain};
pub use code::{code, code_with};
pub use error::{Cause, WrappedError};
pub use ext::ResultExt;
pub use options::{TraceOptions, MAX_DEPTH};
pub use stack::{list_stacks, list_stacks_with, stack, stack_with};
