//! In-memory user table standing in for a database.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
}

/// Errors raised by [`MemoryStore`]. These are the foreign errors the
/// repository layer wraps.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store is not reachable.
    #[error("error from database")]
    Unavailable,

    #[error("row {0} not found")]
    NotFound(u64),

    /// A row with the same primary key already exists.
    #[error("db key error")]
    DuplicateKey { id: u64 },
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: HashMap<u64, User>,
    offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails with [`StoreError::Unavailable`].
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn with_user(mut self, id: u64, name: impl Into<String>) -> Self {
        self.users.insert(id, User { id, name: name.into() });
        self
    }

    pub fn get(&self, id: u64) -> Result<&User, StoreError> {
        if self.offline {
            return Err(StoreError::Unavailable);
        }
        self.users.get(&id).ok_or(StoreError::NotFound(id))
    }

    pub fn insert(&mut self, user: User) -> Result<(), StoreError> {
        if self.offline {
            return Err(StoreError::Unavailable);
        }
        if self.users.contains_key(&user.id) {
            return Err(StoreError::DuplicateKey { id: user.id });
        }
        self.users.insert(user.id, user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get() {
        let mut store = MemoryStore::new();
        store.insert(User { id: 1, name: "ada".into() }).unwrap();
        assert_eq!(store.get(1).unwrap().name, "ada");
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut store = MemoryStore::new().with_user(1, "ada");
        let err = store.insert(User { id: 1, name: "bob".into() }).unwrap_err();
        assert_eq!(err, StoreError::DuplicateKey { id: 1 });
    }

    #[test]
    fn offline_store_fails_every_call() {
        let mut store = MemoryStore::offline();
        assert_eq!(store.get(1), Err(StoreError::Unavailable));
        assert_eq!(
            store.insert(User { id: 1, name: "ada".into() }),
            Err(StoreError::Unavailable)
        );
    }
}
