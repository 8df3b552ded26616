//! Error classes: which subsystem raised a failure.
//!
//! Ids follow the order of the C `git_error_class` enum and never move.
//! New subsystems append; ids past the builtin range are valid values that
//! simply have no builtin name.

/// Coarse tag for the subsystem that produced a failure.
///
/// Orthogonal to [`ErrorCode`](super::ErrorCode): the class says *where*,
/// the code says *what*. Equality uses `id` only.
#[derive(Clone, Copy)]
pub struct ErrorClass {
    pub name: &'static str,
    pub id: i32,
}

impl ErrorClass {
    pub const fn new(name: &'static str, id: i32) -> Self {
        Self { name, id }
    }

    /// Map a raw class id back to a named class, `"unknown"` otherwise.
    pub fn from_raw(id: i32) -> Self {
        BUILTIN_CLASSES
            .iter()
            .copied()
            .find(|c| c.id == id)
            .unwrap_or(Self::new("unknown", id))
    }

    #[inline]
    pub const fn raw(&self) -> i32 {
        self.id
    }
}

impl PartialEq for ErrorClass {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ErrorClass {}

impl core::hash::Hash for ErrorClass {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl core::fmt::Debug for ErrorClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}({})", self.name, self.id)
    }
}

impl core::fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub const GITERR_NOMEMORY:   ErrorClass = ErrorClass::new("GITERR_NOMEMORY", 0);
pub const GITERR_OS:         ErrorClass = ErrorClass::new("GITERR_OS", 1);
pub const GITERR_INVALID:    ErrorClass = ErrorClass::new("GITERR_INVALID", 2);
pub const GITERR_REFERENCE:  ErrorClass = ErrorClass::new("GITERR_REFERENCE", 3);
pub const GITERR_ZLIB:       ErrorClass = ErrorClass::new("GITERR_ZLIB", 4);
pub const GITERR_REPOSITORY: ErrorClass = ErrorClass::new("GITERR_REPOSITORY", 5);
pub const GITERR_CONFIG:     ErrorClass = ErrorClass::new("GITERR_CONFIG", 6);
pub const GITERR_REGEX:      ErrorClass = ErrorClass::new("GITERR_REGEX", 7);
pub const GITERR_ODB:        ErrorClass = ErrorClass::new("GITERR_ODB", 8);
pub const GITERR_INDEX:      ErrorClass = ErrorClass::new("GITERR_INDEX", 9);
pub const GITERR_OBJECT:     ErrorClass = ErrorClass::new("GITERR_OBJECT", 10);
pub const GITERR_NET:        ErrorClass = ErrorClass::new("GITERR_NET", 11);
pub const GITERR_TAG:        ErrorClass = ErrorClass::new("GITERR_TAG", 12);
pub const GITERR_TREE:       ErrorClass = ErrorClass::new("GITERR_TREE", 13);

/// All builtin classes, indexed by id.
pub const BUILTIN_CLASSES: [ErrorClass; 14] = [
    GITERR_NOMEMORY,
    GITERR_OS,
    GITERR_INVALID,
    GITERR_REFERENCE,
    GITERR_ZLIB,
    GITERR_REPOSITORY,
    GITERR_CONFIG,
    GITERR_REGEX,
    GITERR_ODB,
    GITERR_INDEX,
    GITERR_OBJECT,
    GITERR_NET,
    GITERR_TAG,
    GITERR_TREE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_indexed_by_id() {
        for (idx, class) in BUILTIN_CLASSES.iter().enumerate() {
            assert_eq!(class.id as usize, idx, "{:?} out of place", class);
        }
    }

    #[test]
    fn from_raw_round_trips_names() {
        assert_eq!(ErrorClass::from_raw(8).name, "GITERR_ODB");
        assert_eq!(ErrorClass::from_raw(13), GITERR_TREE);
    }

    #[test]
    fn from_raw_unknown_keeps_id() {
        let class = ErrorClass::from_raw(77);
        assert_eq!(class.raw(), 77);
        assert_eq!(class.name, "unknown");
    }

    #[test]
    fn equality_ignores_name() {
        assert_eq!(ErrorClass::new("odb_alias", 8), GITERR_ODB);
    }
}
