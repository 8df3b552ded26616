//! The per-thread error record.
//!
//! The message text is always an independent copy, stored with a trailing
//! NUL so that the C surface can point straight at it. The copy is made
//! with a fallible reservation; when that fails the caller gets the static
//! [`OOM_RECORD`] instead, which needs no allocation at all.

use std::borrow::Cow;
use std::os::raw::c_char;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::codes::{ErrorClass, GITERR_NOMEMORY};

/// Text of the out-of-memory placeholder.
pub const OOM_MESSAGE: &str = "Out of memory";

/// Static fallback installed when a message cannot be copied.
pub static OOM_RECORD: ErrorRecord = ErrorRecord {
    text: Cow::Borrowed("Out of memory\0"),
    class: GITERR_NOMEMORY,
};

static LIVE: AtomicUsize = AtomicUsize::new(0);

/// Owned records currently alive in the process.
///
/// Every owned record a thread leaves in its slot is released at thread
/// exit, so after all reporting threads are joined this drops back to the
/// count held by live threads and outstanding [`LastError`](crate::LastError)
/// views.
pub fn live_records() -> usize {
    LIVE.load(Ordering::Relaxed)
}

/// `{ message, class }` for the most recent failure on a thread.
pub struct ErrorRecord {
    // Message followed by exactly one NUL.
    text: Cow<'static, str>,
    class: ErrorClass,
}

impl ErrorRecord {
    /// Copy `message` into a new record.
    ///
    /// The copy stops at the first interior NUL and, when `limit` is
    /// non-zero, at `limit` bytes (backing off to a char boundary).
    /// Returns `None` if the copy cannot be allocated.
    pub(crate) fn capture(class: ErrorClass, message: &str, limit: usize) -> Option<Self> {
        let message = clip(message, limit);

        let mut text = String::new();
        reserve(&mut text, message.len() + 1)?;
        text.push_str(message);
        text.push('\0');

        LIVE.fetch_add(1, Ordering::Relaxed);
        Some(Self {
            text: Cow::Owned(text),
            class,
        })
    }

    #[inline]
    pub fn message(&self) -> &str {
        let text: &str = &self.text;
        &text[..text.len() - 1]
    }

    #[inline]
    pub fn class(&self) -> ErrorClass {
        self.class
    }

    /// Pointer to the NUL-terminated message. Valid while `self` is.
    #[inline]
    pub fn as_c_ptr(&self) -> *const c_char {
        self.text.as_ptr().cast()
    }

    /// True for the static out-of-memory placeholder.
    pub fn is_oom_placeholder(&self) -> bool {
        matches!(self.text, Cow::Borrowed(_))
    }
}

impl Drop for ErrorRecord {
    fn drop(&mut self) {
        if let Cow::Owned(_) = self.text {
            LIVE.fetch_sub(1, Ordering::Relaxed);
        }
    }
}

impl core::fmt::Debug for ErrorRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ErrorRecord")
            .field("message", &self.message())
            .field("class", &self.class)
            .finish()
    }
}

impl core::fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
thread_local! {
    static FAIL_NEXT_COPY: core::cell::Cell<bool> = const { core::cell::Cell::new(false) };
}

/// Make the next message copy on this thread fail as if out of memory.
#[cfg(test)]
pub(crate) fn fail_next_copy() {
    FAIL_NEXT_COPY.with(|flag| flag.set(true));
}

fn reserve(text: &mut String, len: usize) -> Option<()> {
    #[cfg(test)]
    if FAIL_NEXT_COPY.with(|flag| flag.replace(false)) {
        return None;
    }
    text.try_reserve_exact(len).ok()
}

fn clip(message: &str, limit: usize) -> &str {
    let message = match message.find('\0') {
        Some(nul) => &message[..nul],
        None => message,
    };
    if limit == 0 || message.len() <= limit {
        return message;
    }
    let mut end = limit;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    &message[..end]
}
