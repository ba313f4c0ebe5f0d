// src/log.rs
//
// Append-only file logger. Disabled until `init` is called, so library users
// and tests never get a stray log file. While disabled the macros do not
// evaluate or format their arguments.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();
static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Route all log macros to `path`. First call wins; later calls are ignored.
/// Returns the path that is actually in use.
pub fn init(path: impl AsRef<Path>) -> &'static Path {
    let p = LOG_PATH.get_or_init(|| path.as_ref().to_path_buf());
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = fs::create_dir_all(parent);
        }
    }
    start();
    p.as_path()
}

pub fn enabled() -> bool {
    LOG_PATH.get().is_some()
}

/// Internal logging function
pub fn write_log(level: &str, msg: &str) {
    let Some(path) = LOG_PATH.get() else { return };

    let elapsed = fmt_elapsed(start().elapsed().as_millis());
    let line = format!("[{elapsed}][{level}] {msg}\n");

    if let Ok(_guard) = LOG_LOCK.lock() {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
        {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        if $crate::log::enabled() {
            $crate::log::write_log("INFO", &format!($($arg)*))
        }
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        if $crate::log::enabled() {
            $crate::log::write_log("DEBUG", &format!($($arg)*))
        }
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        if $crate::log::enabled() {
            $crate::log::write_log("ERROR", &format!($($arg)*))
        }
    };
}
