//! # giterr: last-error reporting for the git library
//!
//! Every failing library call returns a numeric [`ErrorCode`] to its caller.
//! The detail (a message and the [`ErrorClass`] of the subsystem that
//! failed) goes into a per-thread slot, where the caller can pick it up
//! afterwards.
//!
//! ## Design
//!
//! - **Error Registry** (`registry`): static `ErrorCode` → description
//!   table. Total, read-only, no allocation per lookup.
//!
//! - **Thread-Local Error Slot** (`slot`): one record per OS thread,
//!   replaced on every report, cleared on demand, dropped at thread exit.
//!   Threads never see each other's records.
//!
//! - **Legacy layer** (`legacy`): the old single-string calls, as thin views
//!   over the two components above.
//!
//! ## Quick Start
//!
//! ```rust
//! use giterr::codes::*;
//!
//! // Producer side: report, then return the code.
//! fn read_pack() -> Result<(), giterr::ErrorCode> {
//!     giterr::report(GITERR_ODB, "packfile corrupted at offset 42");
//!     Err(GIT_EPACKCORRUPTED)
//! }
//!
//! // Caller side: check the code first, then ask for detail.
//! if let Err(code) = read_pack() {
//!     let detail = giterr::last().expect("reported above");
//!     assert_eq!(detail.message(), "packfile corrupted at offset 42");
//!     assert_eq!(detail.class(), GITERR_ODB);
//!     assert_eq!(giterr::describe(code), "The packfile for the ODB is corrupted");
//! }
//!
//! giterr::clear();
//! assert!(giterr::last().is_none());
//! ```
//!
//! ## Feature Flags
//!
//! | Flag      | Effect |
//! |-----------|--------|
//! | `metrics` | Per-class AtomicU64 report counters, Prometheus dump |

pub mod codes;
pub mod config;
pub mod registry;
mod record;
pub mod slot;
pub mod legacy;
mod error;
#[macro_use]
mod macros;
mod convert;

#[cfg(feature = "metrics")]
pub mod metrics;

// ── Public API ────────────────────────────────────────────────────

pub use codes::{ErrorClass, ErrorCode};
pub use registry::{describe, describe_c, RegistryError};
pub use record::{live_records, ErrorRecord, OOM_MESSAGE, OOM_RECORD};
pub use slot::{
    clear, clear_current_error, current_error, is_set, last, report, report_fmt, report_oom,
    report_os, LastError,
};
pub use config::{ConfigError, SlotConfig};
pub use error::GitError;
pub use convert::{to_status, RaiseExt, ResultExt};

#[allow(deprecated)]
pub use legacy::{legacy_clear, legacy_last_error, legacy_strerror};

/// Convenience Result alias for numeric-status returns.
pub type GitResult<T> = Result<T, ErrorCode>;
