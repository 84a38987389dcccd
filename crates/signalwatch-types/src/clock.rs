//! Wall-clock helpers for alert timestamps.
//!
//! Alert ids derive from epoch milliseconds; the human-readable label is the
//! UTC time of day. No calendar math is needed anywhere in the system, so we
//! stay on `SystemTime` rather than pulling in a date crate.

use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Render epoch milliseconds as an "HH:MM:SS" UTC wall-clock label.
pub fn wall_clock_label(epoch_millis: u64) -> String {
    let secs = epoch_millis / 1000;
    let hours = (secs / 3600) % 24;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
