//! Status codes attached by the layers.

pub const BAD_REQUEST: i32 = 400;
pub const NOT_FOUND: i32 = 404;
pub const CONFLICT: i32 = 409;
pub const INTERNAL_SERVER_ERROR: i32 = 500;
