//! Formatting utilities for ticket display.
//!
//! Central location for the relative-time labels and card summaries the
//! dashboard renders, to avoid duplication across shells.

use jiff::Timestamp;

/// Maximum characters for a ticket card's description preview.
pub const SUMMARY_MAX: usize = 100;

/// Format how long ago a point in time was, relative to `now`.
///
/// # Examples
///
/// ```
/// use jiff::{SignedDuration, Timestamp};
/// use quickdesk::formatting::format_time_ago;
///
/// let now: Timestamp = "2024-06-01T12:00:00Z".parse().unwrap();
/// assert_eq!(format_time_ago(now - SignedDuration::from_secs(30), now), "just now");
/// assert_eq!(format_time_ago(now - SignedDuration::from_mins(5), now), "5 minutes ago");
/// assert_eq!(format_time_ago(now - SignedDuration::from_hours(2), now), "2 hours ago");
/// assert_eq!(format_time_ago(now - SignedDuration::from_hours(48), now), "2 days ago");
/// ```
pub fn format_time_ago(then: Timestamp, now: Timestamp) -> String {
    let seconds = now.duration_since(then).as_secs().max(0);

    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        format!("{} minutes ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{} hours ago", seconds / 3600)
    } else {
        format!("{} days ago", seconds / 86_400)
    }
}

/// Truncate text to at most `max` characters, appending an ellipsis when
/// anything was cut. Truncation respects character boundaries.
pub fn truncate_summary(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;

    use super::*;

    fn now() -> Timestamp {
        "2024-06-01T12:00:00Z".parse().expect("valid timestamp")
    }

    #[test]
    fn test_time_ago_just_now() {
        assert_eq!(format_time_ago(now(), now()), "just now");
        assert_eq!(
            format_time_ago(now() - SignedDuration::from_secs(59), now()),
            "just now"
        );
    }

    #[test]
    fn test_time_ago_minutes() {
        assert_eq!(
            format_time_ago(now() - SignedDuration::from_secs(60), now()),
            "1 minutes ago"
        );
        assert_eq!(
            format_time_ago(now() - SignedDuration::from_mins(59), now()),
            "59 minutes ago"
        );
    }

    #[test]
    fn test_time_ago_hours_and_days() {
        assert_eq!(
            format_time_ago(now() - SignedDuration::from_hours(3), now()),
            "3 hours ago"
        );
        assert_eq!(
            format_time_ago(now() - SignedDuration::from_hours(24), now()),
            "1 days ago"
        );
    }

    #[test]
    fn test_time_ago_future_clamps_to_just_now() {
        assert_eq!(
            format_time_ago(now() + SignedDuration::from_hours(1), now()),
            "just now"
        );
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_summary("short", 100), "short");
    }

    #[test]
    fn test_truncate_long_text() {
        let text = "a".repeat(150);
        let result = truncate_summary(&text, SUMMARY_MAX);
        assert_eq!(result.len(), SUMMARY_MAX + 3);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "é".repeat(10);
        let result = truncate_summary(&text, 5);
        assert_eq!(result, format!("{}...", "é".repeat(5)));
    }
}
