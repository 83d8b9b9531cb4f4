//! Repository layer. Talks to the store and starts the error chain.

use errwrap::{callsite, wrap, ResultExt, WrappedError};
use tracing::debug;

use crate::status::{CONFLICT, NOT_FOUND};
use crate::{MemoryStore, StoreError, User};

/// Fetch a user by id.
///
/// An unreachable store starts a fresh chain carrying only the store's
/// message; a missing row is wrapped with [`NOT_FOUND`].
pub fn fetch_user(store: &MemoryStore, id: u64) -> Result<User, WrappedError> {
    match store.get(id) {
        Ok(user) => Ok(user.clone()),
        Err(StoreError::Unavailable) => {
            debug!(user_id = id, "store unavailable");
            Err(wrap!(StoreError::Unavailable.to_string()))
        }
        Err(err) => Err(wrap!(err, NOT_FOUND, "user lookup failed")),
    }
}

/// Insert a user; a duplicate id is wrapped with [`CONFLICT`].
pub fn insert_user(store: &mut MemoryStore, user: User) -> Result<(), WrappedError> {
    store
        .insert(user)
        .wrap_err_code(callsite!(), CONFLICT, "repository error")
}
