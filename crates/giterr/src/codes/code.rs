/// A stable numeric identifier for a specific failure condition.
///
/// `0` is success; every failure code is negative. Codes are never
/// renumbered, only appended, so the set is open: a downstream crate can
/// declare its own constants (below `-1000` by convention) and register a
/// description for them with [`crate::registry::extend`].
///
/// Equality and hashing use `code` only. The `name` is for humans.
///
/// ```
/// use giterr::ErrorCode;
/// const GIT_EPACKCORRUPTED: ErrorCode = ErrorCode::new("GIT_EPACKCORRUPTED", -10);
/// assert!(GIT_EPACKCORRUPTED.is_error());
/// ```
#[derive(Clone, Copy)]
pub struct ErrorCode {
    pub name: &'static str,
    pub code: i32,
}

impl ErrorCode {
    pub const fn new(name: &'static str, code: i32) -> Self {
        Self { name, code }
    }

    /// Map a raw integer back to a named code.
    ///
    /// Known codes (builtin or registered extensions) come back with their
    /// name. Anything else keeps its value under the name `"unknown"`.
    pub fn from_raw(code: i32) -> Self {
        match crate::registry::lookup_raw(code) {
            Some(entry) => entry.code,
            None => Self::new("unknown", code),
        }
    }

    #[inline]
    pub const fn raw(&self) -> i32 {
        self.code
    }

    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.code == 0
    }

    #[inline]
    pub const fn is_error(&self) -> bool {
        self.code < 0
    }
}

impl PartialEq for ErrorCode {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for ErrorCode {}

impl core::hash::Hash for ErrorCode {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl core::fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}({})", self.name, self.code)
    }
}

impl core::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> i32 {
        code.code
    }
}

// ── Builtin codes ─────────────────────────────────────────────────

pub const GIT_SUCCESS:              ErrorCode = ErrorCode::new("GIT_SUCCESS", 0);
pub const GIT_ERROR:                ErrorCode = ErrorCode::new("GIT_ERROR", -1);

// Object identity / lookup
pub const GIT_ENOTOID:              ErrorCode = ErrorCode::new("GIT_ENOTOID", -2);
pub const GIT_ENOTFOUND:            ErrorCode = ErrorCode::new("GIT_ENOTFOUND", -3);

// Resources
pub const GIT_ENOMEM:               ErrorCode = ErrorCode::new("GIT_ENOMEM", -4);
pub const GIT_EOSERR:               ErrorCode = ErrorCode::new("GIT_EOSERR", -5);

// Object validity
pub const GIT_EOBJTYPE:             ErrorCode = ErrorCode::new("GIT_EOBJTYPE", -6);
pub const GIT_ENOTAREPO:            ErrorCode = ErrorCode::new("GIT_ENOTAREPO", -7);
pub const GIT_EINVALIDTYPE:         ErrorCode = ErrorCode::new("GIT_EINVALIDTYPE", -8);
pub const GIT_EMISSINGOBJDATA:      ErrorCode = ErrorCode::new("GIT_EMISSINGOBJDATA", -9);
pub const GIT_EPACKCORRUPTED:       ErrorCode = ErrorCode::new("GIT_EPACKCORRUPTED", -10);

// Locking / compression / busy
pub const GIT_EFLOCKFAIL:           ErrorCode = ErrorCode::new("GIT_EFLOCKFAIL", -11);
pub const GIT_EZLIB:                ErrorCode = ErrorCode::new("GIT_EZLIB", -12);
pub const GIT_EBUSY:                ErrorCode = ErrorCode::new("GIT_EBUSY", -13);
pub const GIT_EBAREINDEX:           ErrorCode = ErrorCode::new("GIT_EBAREINDEX", -14);

// References
pub const GIT_EINVALIDREFNAME:      ErrorCode = ErrorCode::new("GIT_EINVALIDREFNAME", -15);
pub const GIT_EREFCORRUPTED:        ErrorCode = ErrorCode::new("GIT_EREFCORRUPTED", -16);
pub const GIT_ETOONESTEDSYMREF:     ErrorCode = ErrorCode::new("GIT_ETOONESTEDSYMREF", -17);
pub const GIT_EPACKEDREFSCORRUPTED: ErrorCode = ErrorCode::new("GIT_EPACKEDREFSCORRUPTED", -18);

// Paths / walking / state
pub const GIT_EINVALIDPATH:         ErrorCode = ErrorCode::new("GIT_EINVALIDPATH", -19);
pub const GIT_EREVWALKOVER:         ErrorCode = ErrorCode::new("GIT_EREVWALKOVER", -20);
pub const GIT_EINVALIDREFSTATE:     ErrorCode = ErrorCode::new("GIT_EINVALIDREFSTATE", -21);
pub const GIT_ENOTIMPLEMENTED:      ErrorCode = ErrorCode::new("GIT_ENOTIMPLEMENTED", -22);
pub const GIT_EEXISTS:              ErrorCode = ErrorCode::new("GIT_EEXISTS", -23);

// Parsing
pub const GIT_EOVERFLOW:            ErrorCode = ErrorCode::new("GIT_EOVERFLOW", -24);
pub const GIT_ENOTNUM:              ErrorCode = ErrorCode::new("GIT_ENOTNUM", -25);
pub const GIT_ESTREAM:              ErrorCode = ErrorCode::new("GIT_ESTREAM", -26);
pub const GIT_EINVALIDARGS:         ErrorCode = ErrorCode::new("GIT_EINVALIDARGS", -27);
pub const GIT_EOBJCORRUPTED:        ErrorCode = ErrorCode::new("GIT_EOBJCORRUPTED", -28);
pub const GIT_EAMBIGUOUS:           ErrorCode = ErrorCode::new("GIT_EAMBIGUOUS", -29);
pub const GIT_EPASSTHROUGH:         ErrorCode = ErrorCode::new("GIT_EPASSTHROUGH", -30);
pub const GIT_ENOMATCH:             ErrorCode = ErrorCode::new("GIT_ENOMATCH", -31);
pub const GIT_ESHORTBUFFER:         ErrorCode = ErrorCode::new("GIT_ESHORTBUFFER", -32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_by_code() {
        let a = ErrorCode::new("alpha", -3);
        assert_eq!(a, GIT_ENOTFOUND);
        assert_ne!(GIT_ENOTFOUND, GIT_ENOMEM);
    }

    #[test]
    fn success_is_not_error() {
        assert!(GIT_SUCCESS.is_ok());
        assert!(!GIT_SUCCESS.is_error());
        assert!(GIT_ESHORTBUFFER.is_error());
    }

    #[test]
    fn from_raw_known_keeps_name() {
        let code = ErrorCode::from_raw(-10);
        assert_eq!(code, GIT_EPACKCORRUPTED);
        assert_eq!(code.name, "GIT_EPACKCORRUPTED");
    }

    #[test]
    fn from_raw_unknown() {
        let code = ErrorCode::from_raw(-4242);
        assert_eq!(code.raw(), -4242);
        assert_eq!(code.name, "unknown");
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", GIT_EZLIB), "GIT_EZLIB");
        assert_eq!(format!("{:?}", GIT_EZLIB), "GIT_EZLIB(-12)");
    }

    #[test]
    fn into_i32() {
        let raw: i32 = GIT_EAMBIGUOUS.into();
        assert_eq!(raw, -29);
    }
}
