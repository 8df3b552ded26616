/// Report a formatted failure into the calling thread's slot.
///
/// ```
/// use giterr::{giterr, codes::*};
///
/// let offset = 42;
/// giterr!(GITERR_ODB, "packfile corrupted at offset {}", offset);
/// assert_eq!(giterr::last().unwrap().message(), "packfile corrupted at offset 42");
/// ```
#[macro_export]
macro_rules! giterr {
    ($class:expr, $($arg:tt)+) => {{
        $crate::slot::report_fmt($class, format_args!($($arg)+));
    }};
}

/// Report a formatted failure with the last OS error appended.
///
/// The OS error is captured before the message is formatted, so nothing in
/// the format arguments can clobber it.
///
/// ```ignore
/// if unsafe { libc::unlink(path.as_ptr()) } < 0 {
///     giterr_os!(GITERR_OS, "failed to remove lock file '{}'", display);
///     return Err(GIT_EFLOCKFAIL);
/// }
/// ```
#[macro_export]
macro_rules! giterr_os {
    ($class:expr, $($arg:tt)+) => {{
        let __os_err = ::std::io::Error::last_os_error();
        $crate::slot::report_os($class, &format!($($arg)+), &__os_err);
    }};
}

/// Report a formatted failure and return `Err(code)` from the enclosing
/// function.
///
/// ```
/// use giterr::{giterr_bail, codes::*, ErrorCode};
///
/// fn parse_mode(raw: &str) -> Result<u32, ErrorCode> {
///     match u32::from_str_radix(raw, 8) {
///         Ok(mode) => Ok(mode),
///         Err(_) => giterr_bail!(GIT_ENOTNUM, GITERR_TREE, "invalid file mode '{}'", raw),
///     }
/// }
///
/// assert_eq!(parse_mode("xyz"), Err(GIT_ENOTNUM));
/// assert_eq!(giterr::last().unwrap().message(), "invalid file mode 'xyz'");
/// ```
#[macro_export]
macro_rules! giterr_bail {
    ($code:expr, $class:expr, $($arg:tt)+) => {{
        $crate::slot::report_fmt($class, format_args!($($arg)+));
        return ::core::result::Result::Err($code);
    }};
}

#[cfg(test)]
mod tests {
    use crate::codes::*;
    use crate::ErrorCode;

    #[test]
    fn giterr_formats() {
        let name = "refs/heads/..";
        giterr!(GITERR_REFERENCE, "invalid reference name '{}'", name);
        let err = crate::last().unwrap();
        assert_eq!(err.message(), "invalid reference name 'refs/heads/..'");
        assert_eq!(err.class(), GITERR_REFERENCE);
    }

    #[test]
    fn giterr_os_appends_os_text() {
        giterr_os!(GITERR_OS, "failed to stat '{}'", "index");
        let err = crate::last().unwrap();
        assert!(err.message().starts_with("failed to stat 'index': "), "{}", err.message());
        assert_eq!(err.class(), GITERR_OS);
    }

    #[test]
    fn giterr_bail_returns_code() {
        fn check(depth: u32) -> Result<(), ErrorCode> {
            if depth > 5 {
                giterr_bail!(GIT_ETOONESTEDSYMREF, GITERR_REFERENCE, "symref nested {} deep", depth);
            }
            Ok(())
        }

        assert_eq!(check(1), Ok(()));
        assert_eq!(check(9), Err(GIT_ETOONESTEDSYMREF));
        assert_eq!(crate::last().unwrap().message(), "symref nested 9 deep");
    }
}
