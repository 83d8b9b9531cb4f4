//! `samples` crate: a small layered application built on `errwrap`.
//!
//! A request flows controller → service → repository → store. Every layer
//! that sees a failure wraps it with its own message (and sometimes a status
//! code), so the controller ends up holding the whole causal chain.

pub mod controller;
pub mod repository;
pub mod scenario;
pub mod service;
pub mod status;
pub mod store;

pub use scenario::Scenario;
pub use store::{MemoryStore, StoreError, User};
