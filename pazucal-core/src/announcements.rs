//! Announcement feed records and unread accounting.

use serde::{Deserialize, Serialize};

/// One dated announcement. The feed is ordered newest-first, so the first
/// element is the latest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub date: String,
    pub content: String,
}

/// The date of the newest announcement, used as the read watermark.
#[must_use]
pub fn latest_date(feed: &[Announcement]) -> Option<&str> {
    feed.first().map(|item| item.date.as_str())
}

/// Count items dated strictly after the stored watermark.
///
/// Dates are ISO-style strings compared lexicographically. With no
/// watermark, everything is unread.
#[must_use]
pub fn unread_count(feed: &[Announcement], last_read: Option<&str>) -> usize {
    match last_read {
        None => feed.len(),
        Some(watermark) => feed
            .iter()
            .filter(|item| item.date.as_str() > watermark)
            .count(),
    }
}
