// ABOUTME: Human-readable formatting for race times
// ABOUTME: Renders seconds with centisecond precision for reports and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Format a race time in seconds as `"10.78s"`
///
/// Non-finite input renders as `"-"`.
#[must_use]
pub fn format_race_time(seconds: f64) -> String {
    if seconds.is_finite() {
        format!("{seconds:.2}s")
    } else {
        "-".to_owned()
    }
}

/// Format an optional race time, `"-"` when absent
#[must_use]
pub fn format_optional_time(seconds: Option<f64>) -> String {
    seconds.map_or_else(|| "-".to_owned(), format_race_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centisecond_rendering() {
        assert_eq!(format_race_time(10.777), "10.78s");
        assert_eq!(format_race_time(6.5), "6.50s");
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(format_race_time(f64::NAN), "-");
        assert_eq!(format_optional_time(None), "-");
        assert_eq!(format_optional_time(Some(20.9)), "20.90s");
    }
}
