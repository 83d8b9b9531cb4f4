//! Canned failures, one per way a chain can be built.

use errwrap::WrappedError;

use crate::{controller, MemoryStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// The store is down: a three-layer chain with no codes and no foreign cause.
    Offline,
    /// The row is missing: the repository sets 404 on top of a store error.
    Missing,
    /// Duplicate key: the repository sets 409, outer layers keep it.
    Conflict,
    /// Duplicate key: the repository sets 409, the service overrides with 400.
    Override,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Offline,
        Scenario::Missing,
        Scenario::Conflict,
        Scenario::Override,
    ];

    /// Drive the controller into this scenario's failure.
    ///
    /// Returns `None` if the controller unexpectedly succeeded.
    pub fn run(self) -> Option<WrappedError> {
        match self {
            Scenario::Offline => controller::show_profile(&MemoryStore::offline(), 1).err(),
            Scenario::Missing => controller::show_profile(&MemoryStore::new(), 42).err(),
            Scenario::Conflict => {
                let mut store = MemoryStore::new().with_user(1, "ada");
                controller::create_account(&mut store, 1, "ada").err()
            }
            Scenario::Override => {
                let mut store = MemoryStore::new().with_user(1, "ada");
                controller::create_account_strict(&mut store, 1, "ada").err()
            }
        }
    }
}
