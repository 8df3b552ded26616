use std::io;

use crate::codes::*;

/// A classified failure, as a Rust value.
///
/// Producing subsystems build one of these, then [`raise`](GitError::raise)
/// it: the message and class go into the calling thread's slot and the
/// numeric code comes back for the synchronous return path.
///
/// ```
/// use giterr::{GitError, codes::*};
///
/// fn lookup_ref(name: &str) -> Result<(), giterr::ErrorCode> {
///     Err(GitError::new(GIT_EINVALIDREFNAME, GITERR_REFERENCE,
///                       format!("'{name}' is not a valid reference name")).raise())
/// }
///
/// assert_eq!(lookup_ref("a..b"), Err(GIT_EINVALIDREFNAME));
/// assert_eq!(giterr::last().unwrap().message(), "'a..b' is not a valid reference name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GitError {
    code: ErrorCode,
    class: ErrorClass,
    message: String,
}

impl GitError {
    pub fn new(code: ErrorCode, class: ErrorClass, message: impl Into<String>) -> Self {
        Self {
            code,
            class,
            message: message.into(),
        }
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    #[inline]
    pub fn class(&self) -> ErrorClass {
        self.class
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Store this failure in the calling thread's slot and return its code.
    pub fn raise(self) -> ErrorCode {
        crate::slot::report(self.class, &self.message);
        self.code
    }
}

impl From<io::Error> for GitError {
    fn from(err: io::Error) -> Self {
        let (code, class) = match err.kind() {
            io::ErrorKind::NotFound => (GIT_ENOTFOUND, GITERR_OS),
            io::ErrorKind::OutOfMemory => (GIT_ENOMEM, GITERR_NOMEMORY),
            io::ErrorKind::InvalidInput => (GIT_EINVALIDARGS, GITERR_INVALID),
            _ => (GIT_EOSERR, GITERR_OS),
        };
        Self::new(code, class, err.to_string())
    }
}
