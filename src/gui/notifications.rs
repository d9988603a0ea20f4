//! Notification system for the GUI
//!
//! In-app notification entries with unread tracking. Entries are raised by
//! real session events (polling lifecycle, exports, settings changes); there
//! is no synthetic event source.

use std::collections::VecDeque;

/// How many entries the history keeps before discarding the oldest.
pub const NOTIFICATION_LIMIT: usize = 50;

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Info => "[i]",
            NotificationKind::Success => "[OK]",
            NotificationKind::Error => "[!!]",
        }
    }
}

/// A notification entry with message, kind, and timestamp
#[derive(Clone)]
pub struct NotificationEntry {
    pub message: String,
    pub kind: NotificationKind,
    pub timestamp: chrono::DateTime<chrono::Local>,
    pub read: bool,
}

impl NotificationEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(message, NotificationKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::with_kind(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_kind(message, NotificationKind::Error)
    }

    pub fn with_kind(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            timestamp: chrono::Local::now(),
            read: false,
        }
    }

    pub fn time_ago(&self) -> String {
        let now = chrono::Local::now();
        let duration = now.signed_duration_since(self.timestamp);
        if duration.num_seconds() < 60 {
            "just now".to_string()
        } else if duration.num_minutes() < 60 {
            format!("{}m ago", duration.num_minutes())
        } else if duration.num_hours() < 24 {
            format!("{}h ago", duration.num_hours())
        } else {
            self.timestamp.format("%m/%d %H:%M").to_string()
        }
    }
}

/// Push an entry, dropping the oldest once the history limit is reached.
pub fn push_notification(notifications: &mut VecDeque<NotificationEntry>, entry: NotificationEntry) {
    while notifications.len() >= NOTIFICATION_LIMIT {
        notifications.pop_front();
    }
    notifications.push_back(entry);
}

pub fn unread_count(notifications: &VecDeque<NotificationEntry>) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

pub fn mark_all_read(notifications: &mut VecDeque<NotificationEntry>) {
    for entry in notifications.iter_mut() {
        entry.read = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_unread_info() {
        let entry = NotificationEntry::new("hello");
        assert!(!entry.read);
        assert_eq!(entry.kind, NotificationKind::Info);
        assert_eq!(entry.time_ago(), "just now");
    }

    #[test]
    fn test_kind_constructors() {
        assert_eq!(NotificationEntry::success("s").kind, NotificationKind::Success);
        assert_eq!(NotificationEntry::error("e").kind, NotificationKind::Error);
    }

    #[test]
    fn test_unread_count_and_mark_all_read() {
        let mut notifications = VecDeque::new();
        push_notification(&mut notifications, NotificationEntry::new("a"));
        push_notification(&mut notifications, NotificationEntry::new("b"));
        assert_eq!(unread_count(&notifications), 2);

        mark_all_read(&mut notifications);
        assert_eq!(unread_count(&notifications), 0);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut notifications = VecDeque::new();
        for i in 0..NOTIFICATION_LIMIT + 10 {
            push_notification(&mut notifications, NotificationEntry::new(format!("n{}", i)));
        }
        assert_eq!(notifications.len(), NOTIFICATION_LIMIT);
        // Oldest entries were discarded first.
        assert_eq!(notifications.front().map(|n| n.message.as_str()), Some("n10"));
    }

    #[test]
    fn test_time_ago_for_older_entries() {
        let mut entry = NotificationEntry::new("old");
        entry.timestamp = chrono::Local::now() - chrono::Duration::minutes(5);
        assert_eq!(entry.time_ago(), "5m ago");
        entry.timestamp = chrono::Local::now() - chrono::Duration::hours(3);
        assert_eq!(entry.time_ago(), "3h ago");
    }
}
