//! Common display utilities and helpers

use chrono::{DateTime, Utc};

/// Placeholder for absent values
pub const NONE: &str = "--";

/// Truncate string to max length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Value or the placeholder
pub fn or_none(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| NONE.to_string())
}

/// Count or the placeholder
pub fn count(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| NONE.to_string())
}

/// Format timestamp as ISO datetime (YYYY-MM-DDTHH:MM:SSZ)
pub fn format_datetime(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_else(|| NONE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a longer description", 10), "a longe...");
    }

    #[test]
    fn test_or_none() {
        assert_eq!(or_none(Some("x".to_string())), "x");
        assert_eq!(or_none(Some(String::new())), NONE);
        assert_eq!(or_none(None), NONE);
    }

    #[test]
    fn test_format_datetime() {
        let dt = "2024-01-15T10:30:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(format_datetime(Some(dt)), "2024-01-15T10:30:00Z");
        assert_eq!(format_datetime(None), NONE);
    }
}
