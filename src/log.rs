// src/log.rs
//
// Developer log. Everything the panel would have sent to a browser's
// devtools console ends up here, never in the visible transcript.
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

/// Mark panel start-up: pins the elapsed clock and writes a separator so
/// consecutive runs are easy to tell apart in one log file.
pub fn session_start(frontend: &str, base_url: &str) {
    let _ = start();
    write_log("INFO", &session_banner(frontend, base_url));
}

fn session_banner(frontend: &str, base_url: &str) -> String {
    format!(
        "==== {frontend} v{} start, backend {base_url} ====",
        env!("CARGO_PKG_VERSION")
    )
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Append one line to `.store/panel.log`. Failures are swallowed; logging
/// must never take the panel down.
pub fn write_log(level: &str, msg: &str) {
    let elapsed = fmt_elapsed(start().elapsed().as_millis());
    let line = format!("[{elapsed}][{level}] {msg}\n");

    if let Ok(_guard) = LOG_LOCK.lock() {
        let _ = fs::create_dir_all(STORE_DIR);
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(Path::new(LOG_FILE))
        {
            let _ = file.write_all(line.as_bytes());
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

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*))
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
    use super::{fmt_elapsed, session_banner};

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }

    #[test]
    fn banner_names_frontend_and_backend() {
        let b = session_banner("gui", "http://127.0.0.1:8000");
        assert!(b.starts_with("==== gui v"));
        assert!(b.ends_with("start, backend http://127.0.0.1:8000 ===="));
    }
}
