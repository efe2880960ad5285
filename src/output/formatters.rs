//! Reusable formatting utilities for CLI output
//!
//! Timestamps, percentages and placeholder values shared by the display
//! models of several commands.

use chrono::{DateTime, Utc};

/// Placeholder for absent values
pub const NONE: &str = "--";

/// Format a timestamp as `2011-01-26 19:01 UTC`, or "--" when absent.
pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| NONE.to_string())
}

/// Format a percentage with two decimals (`65.2` -> `65.20%`)
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Horizontal bar for a percentage, `width` cells wide.
pub fn percent_bar(value: f64, width: usize) -> String {
    let filled = ((value.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Value or "--"
pub fn or_none(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(NONE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        let dt = "2011-01-26T19:01:12Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(format_timestamp(Some(dt)), "2011-01-26 19:01 UTC");
        assert_eq!(format_timestamp(None), "--");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(65.2), "65.20%");
        assert_eq!(format_percent(100.0), "100.00%");
        assert_eq!(format_percent(0.004), "0.00%");
    }

    #[test]
    fn test_percent_bar() {
        assert_eq!(percent_bar(50.0, 10), "█████░░░░░");
        assert_eq!(percent_bar(100.0, 4), "████");
        assert_eq!(percent_bar(0.0, 4), "░░░░");
        assert_eq!(percent_bar(250.0, 4), "████");
    }

    #[test]
    fn test_or_none() {
        assert_eq!(or_none(Some("MIT License")), "MIT License");
        assert_eq!(or_none(Some("")), "--");
        assert_eq!(or_none(None), "--");
    }
}
