//! Builtin `ErrorCode` and `ErrorClass` constants.
//!
//! # Code Ranges
//!
//! | Range           | Purpose                                      |
//! |-----------------|----------------------------------------------|
//! | `0`             | `GIT_SUCCESS`                                |
//! | `-1 .. -32`     | Builtin failure codes (stable, append-only)  |
//! | `-33 .. -999`   | Reserved for future builtin codes            |
//! | `<= -1000`      | Extension codes registered by other crates   |
//!
//! # Usage
//!
//! ```rust
//! use giterr::codes::*;
//!
//! assert_eq!(GIT_ENOTFOUND.raw(), -3);
//! assert_eq!(GITERR_ODB.raw(), 8);
//! ```

mod code;
mod class;

pub use code::*;
pub use class::*;

/// First code available to extension tables.
pub const EXTENSION_CODE_START: i32 = -1000;
