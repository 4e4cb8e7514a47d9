// src/log.rs
//
// Diagnostics. Each binary picks a default target (the GUI has no console on
// Windows, so it logs to a file); DORKGEN_LOG_FILE overrides either one.
// Debug lines only appear when DORKGEN_DEBUG is set.
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::{ENV_DEBUG, ENV_LOG_FILE};

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();
static SINK: OnceLock<Sink> = OnceLock::new();

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Appended to; the parent directory is created on init
    File(PathBuf),
}

struct Sink {
    target: LogTarget,
    debug: bool,
}

impl Sink {
    fn from_env(default: LogTarget) -> Self {
        Self {
            target: resolve_target(std::env::var_os(ENV_LOG_FILE), default),
            debug: std::env::var_os(ENV_DEBUG).is_some(),
        }
    }
}

/// An explicit, non-empty log file setting beats the binary's default.
pub fn resolve_target(env_file: Option<OsString>, default: LogTarget) -> LogTarget {
    match env_file {
        Some(path) if !path.is_empty() => LogTarget::File(PathBuf::from(path)),
        _ => default,
    }
}

/// Log file the GUI binary uses when nothing else is configured.
pub fn default_gui_log_file() -> PathBuf {
    std::env::temp_dir().join("dorkgen").join("debug.log")
}

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

// Library users and tests that never call `init` log to stderr.
fn sink() -> &'static Sink {
    SINK.get_or_init(|| Sink::from_env(LogTarget::Stderr))
}

/// Pin the clock and settle the sink up front, so the first timestamp is
/// relative to startup rather than to the first log line. Only the first
/// call picks the target.
pub fn init(default: LogTarget) {
    let _ = start();
    let sink = SINK.get_or_init(|| Sink::from_env(default));
    if let LogTarget::File(path) = &sink.target {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if let Err(e) = std::fs::create_dir_all(dir) {
                eprintln!("log: cannot create {}: {e}", dir.display());
            }
        }
    }
}

pub fn target() -> &'static LogTarget {
    &sink().target
}

pub fn debug_enabled() -> bool {
    sink().debug
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Internal logging function
pub fn write_log(level: &str, msg: &str) {
    let elapsed = fmt_elapsed(start().elapsed().as_millis());
    let line = format!("[{elapsed}][{level}] {msg}\n");

    let Ok(_guard) = LOG_LOCK.lock() else { return };

    match &sink().target {
        LogTarget::File(path) => {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                let _ = file.write_all(line.as_bytes());
            }
        }
        LogTarget::Stderr => {
            let _ = std::io::stderr().write_all(line.as_bytes());
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

/// Debug-level logging (DORKGEN_DEBUG)
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        if $crate::log::debug_enabled() {
            $crate::log::write_log("DEBUG", &format!($($arg)*))
        }
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::write_log("WARN", &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }

    #[test]
    fn gui_default_is_a_file_not_stderr() {
        let target = resolve_target(None, LogTarget::File(default_gui_log_file()));
        match target {
            LogTarget::File(path) => {
                assert!(path.starts_with(std::env::temp_dir()));
                assert!(path.ends_with("dorkgen/debug.log"));
            }
            LogTarget::Stderr => panic!("GUI logs would be lost without a console"),
        }
    }

    #[test]
    fn env_file_overrides_default() {
        let t = resolve_target(Some(OsString::from("/tmp/x.log")), LogTarget::Stderr);
        assert_eq!(t, LogTarget::File(PathBuf::from("/tmp/x.log")));
    }

    #[test]
    fn empty_env_file_keeps_default() {
        assert_eq!(resolve_target(Some(OsString::new()), LogTarget::Stderr), LogTarget::Stderr);
    }
}
