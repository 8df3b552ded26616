use crate::codes::{ErrorClass, ErrorCode};
use crate::error::GitError;

// ── ResultExt: report foreign errors ──────────────────────────────

/// Report any `std::error::Error` into the slot while propagating.
///
/// The stored message is `"<context>: <error>"`; the `Err` side becomes the
/// numeric code the caller returns.
///
/// ```ignore
/// use giterr::{ResultExt, codes::*};
///
/// let data = std::fs::read(&path)
///     .or_report(GIT_EOSERR, GITERR_OS, "failed to read loose object")?;
/// ```
pub trait ResultExt<T> {
    fn or_report(self, code: ErrorCode, class: ErrorClass, context: &str) -> Result<T, ErrorCode>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error,
{
    fn or_report(self, code: ErrorCode, class: ErrorClass, context: &str) -> Result<T, ErrorCode> {
        self.map_err(|e| {
            crate::slot::report(class, &format!("{context}: {e}"));
            code
        })
    }
}

// ── RaiseExt: raise GitError results ──────────────────────────────

/// Turn `Result<T, GitError>` into the numeric-status form, reporting the
/// error on the way.
pub trait RaiseExt<T> {
    fn raise(self) -> Result<T, ErrorCode>;
}

impl<T> RaiseExt<T> for Result<T, GitError> {
    fn raise(self) -> Result<T, ErrorCode> {
        self.map_err(GitError::raise)
    }
}

/// Collapse a status result into the C-style integer: `0` or a negative code.
#[inline]
pub fn to_status(result: Result<(), ErrorCode>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(code) => code.raw(),
    }
}
