//! Notification list with read/unread tracking.
//!
//! Marking and removal never fail: unknown ids are ignored. The unread
//! count is recomputed from the current list on every call.

use tokio::sync::RwLock;

use super::{NotificationEvent, NotificationId};

/// Largest unread count the badge shows before switching to `"9+"`.
pub const BADGE_CAP: usize = 9;

/// Session-local store of notification events, oldest insert first.
#[derive(Debug, Default)]
pub struct NotificationStore {
    events: RwLock<Vec<NotificationEvent>>,
}

impl NotificationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `events` in the given order.
    #[must_use]
    pub fn with_events(events: Vec<NotificationEvent>) -> Self {
        Self {
            events: RwLock::new(events),
        }
    }

    /// Returns all notifications in store order.
    pub async fn list(&self) -> Vec<NotificationEvent> {
        self.events.read().await.clone()
    }

    /// Appends a notification emitted elsewhere.
    pub async fn push(&self, event: NotificationEvent) {
        self.events.write().await.push(event);
    }

    /// Marks one notification as read. Unknown ids are ignored.
    ///
    /// Returns `true` if a notification with this id exists.
    pub async fn mark_as_read(&self, id: NotificationId) -> bool {
        let mut events = self.events.write().await;
        match events.iter_mut().find(|n| n.id == id) {
            Some(event) => {
                event.read = true;
                true
            }
            None => false,
        }
    }

    /// Marks every notification as read.
    pub async fn mark_all_as_read(&self) {
        for event in self.events.write().await.iter_mut() {
            event.read = true;
        }
    }

    /// Dismisses a notification. Unknown ids are ignored.
    ///
    /// Returns `true` if a notification was removed.
    pub async fn remove(&self, id: NotificationId) -> bool {
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|n| n.id != id);
        events.len() != before
    }

    /// Number of unread notifications.
    pub async fn unread_count(&self) -> usize {
        count_unread(&self.events.read().await)
    }

    /// All notifications and their unread count, taken from one read of
    /// the list.
    pub async fn feed(&self) -> NotificationFeed {
        let events = self.events.read().await.clone();
        let unread_count = count_unread(&events);
        NotificationFeed {
            events,
            unread_count,
        }
    }

    /// Badge text for the unread count: `None` when everything is read,
    /// `"9+"` above [`BADGE_CAP`].
    pub async fn badge_label(&self) -> Option<String> {
        badge_label(self.unread_count().await)
    }
}

/// Consistent view of the notification list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationFeed {
    /// Notifications in store order.
    pub events: Vec<NotificationEvent>,
    /// Unread notifications among `events`.
    pub unread_count: usize,
}

impl NotificationFeed {
    /// Badge text for [`Self::unread_count`].
    #[must_use]
    pub fn badge_label(&self) -> Option<String> {
        badge_label(self.unread_count)
    }
}

fn count_unread(events: &[NotificationEvent]) -> usize {
    events.iter().filter(|n| !n.read).count()
}

/// Formats an unread count for the notification badge.
#[must_use]
pub fn badge_label(unread: usize) -> Option<String> {
    match unread {
        0 => None,
        n if n > BADGE_CAP => Some(format!("{BADGE_CAP}+")),
        n => Some(n.to_string()),
    }
}
