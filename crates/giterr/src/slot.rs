//! Thread-Local Error Slot.
//!
//! Each OS thread owns one slot holding zero or one [`ErrorRecord`]. No
//! other thread can reach it, so there is no locking: isolation comes from
//! `thread_local!` partitioning, not from mutual exclusion.
//!
//! ```text
//!            report                 report
//!   Empty ───────────▶ Set ◀──────────────┐
//!     ▲  ◀────────────  │ ────────────────┘
//!     │      clear      │
//!     └── clear (no-op) │ thread exit: record dropped
//! ```

use std::cell::RefCell;
use std::fmt;
use std::io;
use std::ops::Deref;
use std::rc::Rc;

use crate::codes::ErrorClass;
use crate::config;
use crate::record::{ErrorRecord, OOM_RECORD};

#[derive(Clone)]
enum Held {
    Owned(Rc<ErrorRecord>),
    Static(&'static ErrorRecord),
}

thread_local! {
    /// Most recent failure on this thread.
    static SLOT: RefCell<Option<Held>> = const { RefCell::new(None) };
}

/// Read-only view of the calling thread's current record.
///
/// Shares the record with the slot instead of copying the message. The
/// view stays valid while held even if the thread reports again; the slot
/// simply moves on to the new record. Not `Send`: it belongs to the thread
/// that produced it.
#[derive(Clone)]
pub struct LastError(Held);

impl Deref for LastError {
    type Target = ErrorRecord;

    fn deref(&self) -> &ErrorRecord {
        match &self.0 {
            Held::Owned(record) => record,
            Held::Static(record) => record,
        }
    }
}

impl fmt::Debug for LastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl fmt::Display for LastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

// ── Writing ───────────────────────────────────────────────────────

fn install(held: Held) {
    // The displaced record is dropped after the borrow ends.
    match SLOT.try_with(|slot| slot.replace(Some(held))) {
        Ok(previous) => drop(previous),
        Err(_) => tracing::trace!("error reported during thread teardown, dropped"),
    }
}

/// Record a failure for the calling thread, replacing any previous one.
///
/// Never fails. `message` is copied; the caller may free or reuse its
/// buffer right away. If the copy cannot be allocated the slot gets the
/// static out-of-memory record instead.
pub fn report(class: ErrorClass, message: &str) {
    let held = match ErrorRecord::capture(class, message, config::max_message_len()) {
        Some(record) => Held::Owned(Rc::new(record)),
        None => {
            tracing::warn!(%class, len = message.len(), "cannot copy error message, storing out-of-memory record");
            Held::Static(&OOM_RECORD)
        }
    };

    if config::log_reports() {
        tracing::debug!(%class, message = %message, "error reported");
    }

    #[cfg(feature = "metrics")]
    crate::metrics::bump(class);

    install(held);
}

/// [`report`] with a formatted message. Used by [`giterr!`](crate::giterr).
pub fn report_fmt(class: ErrorClass, args: fmt::Arguments<'_>) {
    match args.as_str() {
        Some(message) => report(class, message),
        None => report(class, &fmt::format(args)),
    }
}

/// Record `"<message>: <os error>"`.
pub fn report_os(class: ErrorClass, message: &str, err: &io::Error) {
    report(class, &format!("{message}: {err}"));
}

/// Install the static out-of-memory record. Allocates nothing.
pub fn report_oom() {
    #[cfg(feature = "metrics")]
    crate::metrics::bump(OOM_RECORD.class());

    install(Held::Static(&OOM_RECORD));
}

/// Discard the calling thread's record. Idempotent.
pub fn clear() {
    if let Ok(Some(_previous)) = SLOT.try_with(|slot| slot.take()) {
        tracing::trace!("error slot cleared");
    }
}

// ── Reading ───────────────────────────────────────────────────────

/// The calling thread's most recent failure, or `None` if nothing was
/// reported since the last [`clear`].
pub fn last() -> Option<LastError> {
    SLOT.try_with(|slot| slot.borrow().clone())
        .ok()
        .flatten()
        .map(LastError)
}

/// True when the calling thread's slot holds a record.
pub fn is_set() -> bool {
    SLOT.try_with(|slot| slot.borrow().is_some()).unwrap_or(false)
}

/// Public name for [`last`].
#[inline]
pub fn current_error() -> Option<LastError> {
    last()
}

/// Public name for [`clear`].
#[inline]
pub fn clear_current_error() {
    clear()
}
