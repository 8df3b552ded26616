//! Error Registry: `ErrorCode` to static description.
//!
//! Read-only tables. The builtin table is indexed by `-code`, so lookup is
//! a bounds check and one comparison. A single extension table may be
//! installed once with [`extend`]; after that the registry is frozen again.
//!
//! Every description is stored NUL-terminated so the C surface can hand out
//! pointers to it directly.

use std::ffi::CStr;
use std::sync::OnceLock;

use crate::codes::*;

/// Returned by [`describe`] for any code without an entry.
pub const UNKNOWN_ERROR: &str = "Unknown error";

const UNKNOWN_ERROR_C: &CStr = c"Unknown error";

/// One registry row.
///
/// Build with [`registry_entry!`](crate::registry_entry), which appends the
/// NUL terminator at compile time.
#[derive(Clone, Copy)]
pub struct Entry {
    pub code: ErrorCode,
    text: &'static str,
}

impl Entry {
    #[doc(hidden)]
    pub const fn __with_nul(code: ErrorCode, text: &'static str) -> Self {
        Self { code, text }
    }

    /// Description without the terminator.
    pub fn description(&self) -> &'static str {
        self.text.strip_suffix('\0').unwrap_or(self.text)
    }

    /// Description as a C string. Falls back to the unknown-error text if
    /// the entry was not built with a terminator.
    pub fn description_c(&self) -> &'static CStr {
        CStr::from_bytes_with_nul(self.text.as_bytes()).unwrap_or(UNKNOWN_ERROR_C)
    }
}

impl core::fmt::Debug for Entry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Entry")
            .field("code", &self.code)
            .field("description", &self.description())
            .finish()
    }
}

/// Build a registry [`Entry`] from a code and a string literal.
///
/// ```
/// use giterr::{registry_entry, ErrorCode};
/// const GIT_EHOOK: ErrorCode = ErrorCode::new("GIT_EHOOK", -1001);
/// let entry = registry_entry!(GIT_EHOOK, "A hook rejected the operation");
/// assert_eq!(entry.description(), "A hook rejected the operation");
/// ```
#[macro_export]
macro_rules! registry_entry {
    ($code:expr, $text:literal) => {
        $crate::registry::Entry::__with_nul($code, concat!($text, "\0"))
    };
}

// Position i holds the code -i.
static BUILTIN: [Entry; 33] = [
    registry_entry!(GIT_SUCCESS, "No error"),
    registry_entry!(GIT_ERROR, "Unspecified error"),
    registry_entry!(GIT_ENOTOID, "Input was not a properly formatted Git object id"),
    registry_entry!(GIT_ENOTFOUND, "Input does not exist in the scope searched"),
    registry_entry!(GIT_ENOMEM, "Not enough space available"),
    registry_entry!(GIT_EOSERR, "Consult the OS error information"),
    registry_entry!(GIT_EOBJTYPE, "The specified object is of invalid type"),
    registry_entry!(GIT_ENOTAREPO, "The specified repository is invalid"),
    registry_entry!(GIT_EINVALIDTYPE, "The object type is invalid or doesn't match"),
    registry_entry!(GIT_EMISSINGOBJDATA, "The object cannot be written because it's missing internal data"),
    registry_entry!(GIT_EPACKCORRUPTED, "The packfile for the ODB is corrupted"),
    registry_entry!(GIT_EFLOCKFAIL, "Failed to acquire or release a file lock"),
    registry_entry!(GIT_EZLIB, "The Z library failed to inflate/deflate an object's data"),
    registry_entry!(GIT_EBUSY, "The queried object is currently busy"),
    registry_entry!(GIT_EBAREINDEX, "The index file is not backed up by an existing repository"),
    registry_entry!(GIT_EINVALIDREFNAME, "The name of the reference is not valid"),
    registry_entry!(GIT_EREFCORRUPTED, "The specified reference has its data corrupted"),
    registry_entry!(GIT_ETOONESTEDSYMREF, "The specified symbolic reference is too deeply nested"),
    registry_entry!(GIT_EPACKEDREFSCORRUPTED, "The pack-refs file is either corrupted or its format is not currently supported"),
    registry_entry!(GIT_EINVALIDPATH, "The path is invalid"),
    registry_entry!(GIT_EREVWALKOVER, "The revision walker is empty; there are no more commits left to iterate"),
    registry_entry!(GIT_EINVALIDREFSTATE, "The state of the reference is not valid"),
    registry_entry!(GIT_ENOTIMPLEMENTED, "This feature has not been implemented yet"),
    registry_entry!(GIT_EEXISTS, "A reference with this name already exists"),
    registry_entry!(GIT_EOVERFLOW, "The given integer literal is too large to be parsed"),
    registry_entry!(GIT_ENOTNUM, "The given literal is not a valid number"),
    registry_entry!(GIT_ESTREAM, "Streaming error"),
    registry_entry!(GIT_EINVALIDARGS, "Invalid arguments to function"),
    registry_entry!(GIT_EOBJCORRUPTED, "The specified object has its data corrupted"),
    registry_entry!(GIT_EAMBIGUOUS, "The given short oid is ambiguous"),
    registry_entry!(GIT_EPASSTHROUGH, "Skip and passthrough the given ODB backend"),
    registry_entry!(GIT_ENOMATCH, "The path pattern and string did not match"),
    registry_entry!(GIT_ESHORTBUFFER, "The buffer is too short to satisfy the request"),
];

static EXTENSIONS: OnceLock<&'static [Entry]> = OnceLock::new();

/// Errors from [`extend`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    #[error("code {0} is not a failure code")]
    NotAFailure(i32),

    #[error("code {0} is in the builtin or reserved range")]
    Reserved(i32),

    #[error("code {0} appears more than once in the extension table")]
    Duplicate(i32),

    #[error("code {0} has an empty description")]
    EmptyDescription(i32),

    #[error("description for code {0} contains a NUL byte")]
    InteriorNul(i32),

    #[error("registry already extended")]
    AlreadyExtended,
}

// ── Lookup ────────────────────────────────────────────────────────

fn builtin(raw: i32) -> Option<&'static Entry> {
    let idx = usize::try_from(raw.checked_neg()?).ok()?;
    BUILTIN.get(idx).filter(|e| e.code.code == raw)
}

pub(crate) fn lookup_raw(raw: i32) -> Option<&'static Entry> {
    builtin(raw).or_else(|| {
        EXTENSIONS
            .get()?
            .iter()
            .find(|e| e.code.code == raw)
    })
}

/// Registry row for `code`, if any.
#[inline]
pub fn lookup(code: ErrorCode) -> Option<&'static Entry> {
    lookup_raw(code.code)
}

/// Static description for `code`.
///
/// Total: codes without an entry get [`UNKNOWN_ERROR`]. Never allocates.
///
/// ```
/// use giterr::{describe, codes::GIT_ENOTFOUND, ErrorCode};
/// assert_eq!(describe(GIT_ENOTFOUND), "Input does not exist in the scope searched");
/// assert_eq!(describe(ErrorCode::new("?", -777)), "Unknown error");
/// ```
pub fn describe(code: ErrorCode) -> &'static str {
    lookup(code).map_or(UNKNOWN_ERROR, Entry::description)
}

/// [`describe`] as a NUL-terminated C string.
pub fn describe_c(code: ErrorCode) -> &'static CStr {
    lookup(code).map_or(UNKNOWN_ERROR_C, Entry::description_c)
}

/// Builtin rows in code order (`GIT_SUCCESS` first).
pub fn entries() -> impl Iterator<Item = &'static Entry> {
    BUILTIN.iter()
}

// ── Extension ─────────────────────────────────────────────────────

/// Install the extension table. Can succeed only once per process.
///
/// Every code must be `<= EXTENSION_CODE_START` and unique within the
/// table, and every description non-empty and free of NUL bytes. Validation happens before anything is installed, so a rejected
/// table leaves the registry untouched.
pub fn extend(entries: &'static [Entry]) -> Result<(), RegistryError> {
    for (i, entry) in entries.iter().enumerate() {
        let raw = entry.code.code;
        if raw >= 0 {
            return Err(RegistryError::NotAFailure(raw));
        }
        if raw > EXTENSION_CODE_START {
            return Err(RegistryError::Reserved(raw));
        }
        if entries[..i].iter().any(|e| e.code.code == raw) {
            return Err(RegistryError::Duplicate(raw));
        }
        if entry.description().is_empty() {
            return Err(RegistryError::EmptyDescription(raw));
        }
        if CStr::from_bytes_with_nul(entry.text.as_bytes()).is_err() {
            return Err(RegistryError::InteriorNul(raw));
        }
    }

    EXTENSIONS
        .set(entries)
        .map_err(|_| RegistryError::AlreadyExtended)?;

    tracing::debug!(count = entries.len(), "error registry extended");
    Ok(())
}
