//! Controller layer: the outermost wrap, plus response shaping.

use std::error::Error;

use errwrap::{code, report, wrap, WrappedError};

use crate::service;
use crate::status::INTERNAL_SERVER_ERROR;
use crate::MemoryStore;

/// What the controller hands back to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: i32,
    pub body: String,
}

impl Response {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    /// Shape a failed chain into a response: the resolved code becomes the
    /// status (500 when none was set) and only the outer message is exposed.
    /// The full stack goes to the log.
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        report::log(err);
        let status = match code(Some(err)) {
            0 => INTERNAL_SERVER_ERROR,
            status => status,
        };
        Self { status, body: err.to_string() }
    }
}

pub fn show_profile(store: &MemoryStore, id: u64) -> Result<String, WrappedError> {
    let user = service::load_profile(store, id).map_err(|err| wrap!(err, "controller failed"))?;
    Ok(format!("hello, {}", user.name))
}

pub fn create_account(store: &mut MemoryStore, id: u64, name: &str) -> Result<(), WrappedError> {
    service::register(store, id, name).map_err(|err| wrap!(err, "controller error"))
}

pub fn create_account_strict(
    store: &mut MemoryStore,
    id: u64,
    name: &str,
) -> Result<(), WrappedError> {
    service::register_strict(store, id, name).map_err(|err| wrap!(err, "controller error"))
}

/// Run [`show_profile`] and turn its outcome into a [`Response`].
pub fn handle_show_profile(store: &MemoryStore, id: u64) -> Response {
    match show_profile(store, id) {
        Ok(body) => Response::ok(body),
        Err(err) => Response::from_error(&err),
    }
}

pub fn handle_create_account(store: &mut MemoryStore, id: u64, name: &str) -> Response {
    match create_account(store, id, name) {
        Ok(()) => Response { status: 201, body: format!("created {id}") },
        Err(err) => Response::from_error(&err),
    }
}
