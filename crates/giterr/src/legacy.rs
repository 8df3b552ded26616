//! Superseded single-string API.
//!
//! Kept for call sites that predate the classified slot. Every function here
//! is a view over [`crate::slot`] and [`crate::registry`]; nothing here holds
//! state of its own.

#![allow(deprecated)]

use crate::codes::ErrorCode;

/// Message of the calling thread's current error, as an owned string.
///
/// `None` when nothing is recorded (the C shim maps this to `NULL`).
#[deprecated(note = "use giterr::last() for the message and its class")]
pub fn legacy_last_error() -> Option<String> {
    crate::slot::last().map(|err| err.message().to_owned())
}

/// `strerror()` for library codes.
#[deprecated(note = "use giterr::describe()")]
pub fn legacy_strerror(code: ErrorCode) -> &'static str {
    crate::registry::describe(code)
}

/// Clear the calling thread's error.
#[deprecated(note = "use giterr::clear()")]
pub fn legacy_clear() {
    crate::slot::clear()
}
