//! Helper functions for the GUI
//!
//! Severity and direction glyphs, clock formatting, and staleness labels.

use crate::feed::{Severity, TxDirection};
use chrono::{DateTime, Local};

/// ASCII icon for an alert severity. High severity gets the most urgent
/// marker; anything below medium is informational.
pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "[!!]",
        Severity::Medium => "[!]",
        Severity::Low => "[i]",
    }
}

/// Directional glyph for a transaction row: incoming transfers point down
/// into the account, outgoing ones point up and out.
pub fn direction_icon(direction: TxDirection) -> &'static str {
    match direction {
        TxDirection::Credit => "[v]",
        TxDirection::Debit => "[^]",
    }
}

/// Top-bar clock text, 24-hour format.
pub fn format_clock(now: DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Label describing how fresh the monitor's data is. Staleness after failed
/// cycles shows up here rather than as an error banner.
pub fn staleness_label(last_refresh: Option<DateTime<Local>>) -> String {
    match last_refresh {
        None => "no data yet".to_string(),
        Some(at) => {
            let elapsed = Local::now().signed_duration_since(at);
            if elapsed.num_seconds() < 2 {
                "updated just now".to_string()
            } else if elapsed.num_seconds() < 60 {
                format!("updated {}s ago", elapsed.num_seconds())
            } else if elapsed.num_minutes() < 60 {
                format!("updated {}m ago", elapsed.num_minutes())
            } else {
                format!("updated at {}", at.format("%H:%M"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_severity_icons() {
        assert_eq!(severity_icon(Severity::High), "[!!]");
        assert_eq!(severity_icon(Severity::Medium), "[!]");
        assert_eq!(severity_icon(Severity::Low), "[i]");
    }

    #[test]
    fn test_direction_icons() {
        assert_eq!(direction_icon(TxDirection::Credit), "[v]");
        assert_eq!(direction_icon(TxDirection::Debit), "[^]");
    }

    #[test]
    fn test_format_clock() {
        let at = Local::now()
            .date_naive()
            .and_hms_opt(9, 5, 30)
            .and_then(|dt| dt.and_local_timezone(Local).single());
        if let Some(at) = at {
            assert_eq!(format_clock(at), "09:05:30");
        }
    }

    #[test]
    fn test_staleness_without_data() {
        assert_eq!(staleness_label(None), "no data yet");
    }

    #[test]
    fn test_staleness_fresh() {
        assert_eq!(staleness_label(Some(Local::now())), "updated just now");
    }

    #[test]
    fn test_staleness_seconds() {
        let at = Local::now() - Duration::seconds(12);
        assert_eq!(staleness_label(Some(at)), "updated 12s ago");
    }

    #[test]
    fn test_staleness_minutes() {
        let at = Local::now() - Duration::minutes(3);
        assert_eq!(staleness_label(Some(at)), "updated 3m ago");
    }
}
