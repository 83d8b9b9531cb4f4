//! Service layer. Business rules on top of the repository.

use errwrap::{wrap, WrappedError};
use tracing::warn;

use crate::repository;
use crate::status::BAD_REQUEST;
use crate::{MemoryStore, User};

pub fn load_profile(store: &MemoryStore, id: u64) -> Result<User, WrappedError> {
    let user = match repository::fetch_user(store, id) {
        Ok(user) => user,
        Err(err) => {
            warn!(user_id = id, error = %err, "profile lookup failed");
            return Err(wrap!(err, "service failed"));
        }
    };
    Ok(user)
}

/// Register a new user, keeping whatever code the repository chose.
pub fn register(store: &mut MemoryStore, id: u64, name: &str) -> Result<(), WrappedError> {
    let user = User { id, name: name.to_owned() };
    repository::insert_user(store, user).map_err(|err| wrap!(err, "service error"))
}

/// Like [`register`], but reports every repository failure as [`BAD_REQUEST`].
pub fn register_strict(store: &mut MemoryStore, id: u64, name: &str) -> Result<(), WrappedError> {
    let user = User { id, name: name.to_owned() };
    repository::insert_user(store, user).map_err(|err| wrap!(err, BAD_REQUEST, "service error"))
}
