// src/core/size.rs
use crate::config::consts::{PLACEHOLDER, SIZE_UNITS};

/// Human-readable byte count with one decimal place: `"1.5 KB"`.
///
/// Picks the largest unit (B, KB, MB, GB) that keeps the *displayed* value
/// at or above 1, i.e. the shown number stays below 1024 unless we are
/// already at GB. `None` renders as the placeholder dash.
pub fn format_size(bytes: Option<u64>) -> String {
    let Some(bytes) = bytes else {
        return s!(PLACEHOLDER);
    };

    let last = SIZE_UNITS.len() - 1;
    let mut size = bytes as f64;
    let mut idx = 0;
    while size >= 1024.0 && idx < last {
        size /= 1024.0;
        idx += 1;
    }
    // 1023.96 KB would print as "1024.0 KB"
    if round1(size) >= 1024.0 && idx < last {
        size /= 1024.0;
        idx += 1;
    }

    format!("{:.1} {}", size, SIZE_UNITS[idx])
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
