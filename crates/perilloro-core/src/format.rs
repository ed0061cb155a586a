//! Time conversion and formatting helpers

/// Convert minutes to seconds
pub fn min_to_sec(minutes: f64) -> f64 {
    minutes * 60.0
}

/// Split a duration in seconds into whole `(hours, minutes, seconds)`.
///
/// Fractional seconds are truncated. Negative input is treated as zero.
pub fn format_time(seconds: f64) -> (u64, u64, u64) {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    (total / 3600, (total % 3600) / 60, total % 60)
}

/// Render a duration in seconds as `HhMmSs`, e.g. `1h1m1s`
pub fn hms(seconds: f64) -> String {
    let (h, m, s) = format_time(seconds);
    format!("{}h{}m{}s", h, m, s)
}
