//! C bindings for the giterr error slot.
//!
//! Mirrors `git2/errors.h`:
//!
//! | Function           | Status     | Rust side                         |
//! |--------------------|------------|-----------------------------------|
//! | `git_error_last`   | current    | [`giterr::last`]                  |
//! | `git_error_clear`  | current    | [`giterr::clear`]                 |
//! | `git_lasterror`    | deprecated | message of [`giterr::last`]       |
//! | `git_strerror`     | deprecated | [`giterr::describe_c`]            |
//! | `git_clearerror`   | deprecated | [`giterr::clear`]                 |
//!
//! Pointers handed out here stay valid until the next call into this API on
//! the same thread. The per-thread view only caches the current record; the
//! slot in `giterr` stays the single source of truth.

#![allow(non_camel_case_types)]

use std::cell::RefCell;
use std::ptr;

use giterr::codes::GIT_EOSERR;
use giterr::{ErrorCode, LastError};
use libc::{c_char, c_int};

/// C view of an error record.
#[repr(C)]
#[derive(Debug)]
pub struct git_error {
    pub message: *mut c_char,
    pub klass: c_int,
}

struct View {
    raw: git_error,
    // Keeps the record behind `raw.message` alive.
    held: Option<LastError>,
}

thread_local! {
    static VIEW: RefCell<View> = const {
        RefCell::new(View {
            raw: git_error { message: ptr::null_mut(), klass: 0 },
            held: None,
        })
    };
}

/// Point the thread's view at the current record.
fn refresh() -> Option<(*const git_error, *const c_char)> {
    let err = giterr::last()?;
    VIEW.try_with(|view| {
        let mut view = view.borrow_mut();
        view.raw = git_error {
            message: err.as_c_ptr().cast_mut(),
            klass: err.class().raw(),
        };
        view.held = Some(err);
        (&view.raw as *const git_error, view.raw.message.cast_const())
    })
    .ok()
}

fn release_view() {
    let _ = VIEW.try_with(|view| {
        let mut view = view.borrow_mut();
        view.raw = git_error { message: ptr::null_mut(), klass: 0 };
        view.held.take()
    });
}

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        fn os_strerror() -> *const c_char {
            let errno: c_int = nix::errno::Errno::last_raw();
            // SAFETY: strerror always returns a valid NUL-terminated string.
            unsafe { libc::strerror(errno) }
        }
    } else {
        fn os_strerror() -> *const c_char {
            giterr::describe_c(GIT_EOSERR).as_ptr()
        }
    }
}

// ── Current API ───────────────────────────────────────────────────

/// Last error recorded on the calling thread, or `NULL`.
#[no_mangle]
pub extern "C" fn git_error_last() -> *const git_error {
    match refresh() {
        Some((raw, _)) => raw,
        None => ptr::null(),
    }
}

/// Clear the last error recorded on the calling thread.
#[no_mangle]
pub extern "C" fn git_error_clear() {
    giterr::clear();
    release_view();
}

// ── Deprecated API ────────────────────────────────────────────────

/// Message of the calling thread's last error, or `NULL`.
#[no_mangle]
pub extern "C" fn git_lasterror() -> *const c_char {
    match refresh() {
        Some((_, message)) => message,
        None => ptr::null(),
    }
}

/// Static description of `num`. For `GIT_EOSERR`, the OS text for the
/// current `errno`.
#[no_mangle]
pub extern "C" fn git_strerror(num: c_int) -> *const c_char {
    let code = ErrorCode::from_raw(num);
    if code == GIT_EOSERR {
        return os_strerror();
    }
    giterr::describe_c(code).as_ptr()
}

/// Same as [`git_error_clear`].
#[no_mangle]
pub extern "C" fn git_clearerror() {
    git_error_clear()
}
