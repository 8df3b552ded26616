//! Process-wide settings for the error slot.
//!
//! # Environment Variables
//!
//! - `GIT2_ERROR_MAX_MESSAGE=<bytes>` - Cut stored messages to this many bytes (0 = no limit)
//! - `GIT2_ERROR_LOG=1` - Emit a `tracing` debug event for every reported error
//!
//! Read once, on first use. The setters below override whatever the
//! environment said.

use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Once;

pub const ENV_MAX_MESSAGE: &str = "GIT2_ERROR_MAX_MESSAGE";
pub const ENV_LOG: &str = "GIT2_ERROR_LOG";

static MAX_MESSAGE_LEN: AtomicUsize = AtomicUsize::new(0);
static LOG_REPORTS: AtomicBool = AtomicBool::new(false);
static INITIALIZED: AtomicBool = AtomicBool::new(false);
static LOAD: Once = Once::new();

/// Errors from strict parsing with [`SlotConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key}: expected an unsigned byte count, got {value:?}")]
    InvalidLength { key: &'static str, value: String },

    #[error("{key}: expected a boolean (1/true/yes/on or 0/false/no/off), got {value:?}")]
    InvalidBool { key: &'static str, value: String },
}

/// Snapshot of the slot settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotConfig {
    /// Upper bound on stored message bytes. `0` keeps messages whole.
    pub max_message_len: usize,

    /// Emit a debug event per report.
    pub log_reports: bool,
}

impl SlotConfig {
    /// Parse the environment, failing on values that do not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parse from any key/value source. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_MAX_MESSAGE) {
            config.max_message_len = parse(value.trim())
                .ok_or(ConfigError::InvalidLength { key: ENV_MAX_MESSAGE, value })?;
        }

        if let Some(value) = lookup(ENV_LOG) {
            config.log_reports = parse_bool(&value)
                .ok_or(ConfigError::InvalidBool { key: ENV_LOG, value })?;
        }

        Ok(config)
    }

    /// Make this the active configuration.
    pub fn apply(self) {
        init();
        MAX_MESSAGE_LEN.store(self.max_message_len, Ordering::Relaxed);
        LOG_REPORTS.store(self.log_reports, Ordering::Relaxed);
    }
}

fn parse<T: FromStr>(value: &str) -> Option<T> {
    value.parse().ok()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Load settings from the environment.
///
/// Called automatically on first use. Bad values are logged and replaced
/// by defaults; the slot must stay usable whatever the environment holds.
/// Threads racing on first use block until the values are stored.
pub fn init() {
    LOAD.call_once(|| {
        match SlotConfig::from_env() {
            Ok(config) => {
                MAX_MESSAGE_LEN.store(config.max_message_len, Ordering::Relaxed);
                LOG_REPORTS.store(config.log_reports, Ordering::Relaxed);
            }
            Err(err) => {
                tracing::warn!(error = %err, "ignoring error slot environment, using defaults");
            }
        }
        INITIALIZED.store(true, Ordering::Release);
    });
}

/// The active configuration.
pub fn current() -> SlotConfig {
    SlotConfig {
        max_message_len: max_message_len(),
        log_reports: log_reports(),
    }
}

#[inline]
pub fn max_message_len() -> usize {
    if !INITIALIZED.load(Ordering::Acquire) {
        init();
    }
    MAX_MESSAGE_LEN.load(Ordering::Relaxed)
}

#[inline]
pub fn log_reports() -> bool {
    if !INITIALIZED.load(Ordering::Acquire) {
        init();
    }
    LOG_REPORTS.load(Ordering::Relaxed)
}

/// Set the message limit programmatically.
pub fn set_max_message_len(len: usize) {
    init();
    MAX_MESSAGE_LEN.store(len, Ordering::Relaxed);
}

/// Turn per-report logging on or off.
pub fn set_log_reports(enabled: bool) {
    init();
    LOG_REPORTS.store(enabled, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_when_unset() {
        let config = SlotConfig::from_lookup(source(&[])).unwrap();
        assert_eq!(config, SlotConfig::default());
        assert_eq!(config.max_message_len, 0);
        assert!(!config.log_reports);
    }

    #[test]
    fn parses_values() {
        let config = SlotConfig::from_lookup(source(&[
            (ENV_MAX_MESSAGE, " 256 "),
            (ENV_LOG, "YES"),
        ]))
        .unwrap();
        assert_eq!(config.max_message_len, 256);
        assert!(config.log_reports);
    }

    #[test]
    fn bool_variants() {
        for on in ["1", "true", "TRUE", "yes", "on"] {
            assert_eq!(parse_bool(on), Some(true), "{on}");
        }
        for off in ["0", "false", "no", "off", ""] {
            assert_eq!(parse_bool(off), Some(false), "{off}");
        }
        assert_eq!(parse_bool("garbage"), None);
    }

    #[test]
    fn rejects_bad_length() {
        let err = SlotConfig::from_lookup(source(&[(ENV_MAX_MESSAGE, "lots")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidLength { key: ENV_MAX_MESSAGE, value: "lots".to_string() }
        );
        assert!(err.to_string().contains("GIT2_ERROR_MAX_MESSAGE"));
    }

    #[test]
    fn rejects_bad_bool() {
        let err = SlotConfig::from_lookup(source(&[(ENV_LOG, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { key: ENV_LOG, .. }));
    }
}
