//! Time formatting helpers.

/// Format a millisecond duration to a human-readable string.
pub fn format_duration_ms(millis: u64) -> String {
    if millis < 1_000 {
        format!("{}ms", millis)
    } else if millis < 60_000 {
        format!("{:.2}s", millis as f64 / 1000.0)
    } else {
        format!("{}m {:.1}s", millis / 60_000, (millis % 60_000) as f64 / 1000.0)
    }
}
