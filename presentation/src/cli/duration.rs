//! Human-friendly durations for `--limit`.
//!
//! Anything `humantime` understands (`45s`, `1m30s`, `500ms`, `1h`) plus a
//! bare integer meaning seconds.

use std::time::Duration;

pub use humantime::DurationError;

/// Parse a time limit such as `30`, `30s`, `1m30s` or `500ms`.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let s = input.trim();
    match s.parse::<u64>() {
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(_) => humantime::parse_duration(s),
    }
}

/// Format a duration for display: `30s`, `1m 30s`, `500ms`.
pub fn format_duration(d: Duration) -> String {
    humantime::format_duration(d).to_string()
}
