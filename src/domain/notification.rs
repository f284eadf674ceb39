//! Notification events about booking lifecycle changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Booking, NotificationId};

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum NotificationKind {
    /// A booking was created or confirmed.
    #[serde(rename = "booking.created")]
    BookingCreated,
    /// An appointment is about to start.
    #[serde(rename = "booking.reminder")]
    BookingReminder,
    /// A booking was rescheduled or otherwise changed.
    #[serde(rename = "booking.updated")]
    BookingUpdated,
}

impl NotificationKind {
    /// Returns the wire name, e.g. `"booking.created"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BookingCreated => "booking.created",
            Self::BookingReminder => "booking.reminder",
            Self::BookingUpdated => "booking.updated",
        }
    }
}

/// A user-facing alert with read/unread state.
///
/// The optional `booking` is a snapshot; it may reference a booking the
/// booking store does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NotificationEvent {
    /// Notification identifier.
    pub id: NotificationId,
    /// Event kind.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Short headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// When the event was emitted.
    pub timestamp: DateTime<Utc>,
    /// Related booking, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking: Option<Booking>,
    /// Whether the viewing user has read it.
    pub read: bool,
}

impl NotificationEvent {
    /// Creates an unread notification stamped with `timestamp`.
    #[must_use]
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: title.into(),
            message: message.into(),
            timestamp,
            booking: None,
            read: false,
        }
    }
}

/// Formats the age of `timestamp` relative to `now`.
///
/// Whole minutes, floored: under 1 → `"Just now"`, under 60 → `"{m}m ago"`,
/// under 1440 → `"{h}h ago"`, otherwise `"{d}d ago"`. Timestamps after
/// `now` read `"Just now"`.
#[must_use]
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes();
    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 1440 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / 1440)
    }
}
