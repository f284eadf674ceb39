//! Notification DTOs with display-only relative time labels.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{NotificationEvent, relative_time};

/// A notification plus its age label.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    /// The stored event.
    #[serde(flatten)]
    pub event: NotificationEvent,
    /// Age such as `"5m ago"`, computed at response time.
    pub relative_time: String,
}

impl NotificationDto {
    /// Labels `event` relative to `now`.
    #[must_use]
    pub fn new(event: NotificationEvent, now: DateTime<Utc>) -> Self {
        let relative_time = relative_time(event.timestamp, now);
        Self {
            event,
            relative_time,
        }
    }
}

/// Response body for `GET /notifications`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationListResponse {
    /// Notifications in store order.
    pub data: Vec<NotificationDto>,
    /// Number of unread notifications.
    pub unread_count: usize,
    /// Badge text; absent when everything is read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}
