//! Dashboard service: orchestrates the stores, derived views, and the
//! creation workflow.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::creation::{
    BookingCreationWorkflow, BookingSubmitter, RepositorySubmitter, SimulatedSubmitter,
    SubmissionOutcome,
};
use crate::config::{DashboardConfig, SubmitMode};
use crate::domain::seed::{demo_bookings, demo_notifications};
use crate::domain::{
    Booking, BookingDraft, BookingId, BookingPartition, BookingRepository, BookingStats,
    BookingStatus, Catalog, InMemoryBookingRepository, NotificationEvent, NotificationFeed,
    NotificationId, NotificationStore, is_past, is_upcoming,
};
use crate::error::DashboardError;

/// Which bookings a list request returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingView {
    /// Every booking.
    #[default]
    All,
    /// Bookings starting later that are not cancelled.
    Upcoming,
    /// Bookings already started, plus completed ones.
    Past,
}

/// Stats plus both booking groups, computed from one store read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Reference instant of the grouping.
    pub generated_at: DateTime<Utc>,
    /// Per-status counts.
    pub stats: BookingStats,
    /// Upcoming and past bookings.
    #[serde(flatten)]
    pub partition: BookingPartition,
}

/// Orchestration layer over the booking and notification stores.
///
/// Derived values are computed from the current store contents on each
/// call; nothing is cached.
#[derive(Debug, Clone)]
pub struct DashboardService {
    bookings: Arc<dyn BookingRepository>,
    notifications: Arc<NotificationStore>,
    workflow: Arc<BookingCreationWorkflow>,
    catalog: Catalog,
}

impl DashboardService {
    /// Creates a new `DashboardService`.
    #[must_use]
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        notifications: Arc<NotificationStore>,
        workflow: Arc<BookingCreationWorkflow>,
        catalog: Catalog,
    ) -> Self {
        Self {
            bookings,
            notifications,
            workflow,
            catalog,
        }
    }

    /// Builds in-memory stores, optional demo data, and the submitter
    /// selected by `config`.
    #[must_use]
    pub fn from_config(config: &DashboardConfig) -> Self {
        let catalog = Catalog::standard();
        let now = Utc::now();

        let (bookings, notifications) = if config.seed_demo_data {
            (
                InMemoryBookingRepository::with_bookings(demo_bookings(
                    &catalog,
                    config.user_id,
                    now,
                )),
                NotificationStore::with_events(demo_notifications(now)),
            )
        } else {
            (InMemoryBookingRepository::new(), NotificationStore::new())
        };
        let bookings: Arc<dyn BookingRepository> = Arc::new(bookings);

        let submitter: Arc<dyn BookingSubmitter> = match config.submit_mode {
            SubmitMode::Simulated => Arc::new(SimulatedSubmitter::new(config.submit_latency)),
            SubmitMode::Repository => Arc::new(RepositorySubmitter::new(
                config.submit_latency,
                Arc::clone(&bookings),
                catalog.clone(),
                config.user_id,
            )),
        };

        tracing::info!(
            seeded = config.seed_demo_data,
            submit_mode = ?config.submit_mode,
            "dashboard service ready"
        );

        Self::new(
            bookings,
            Arc::new(notifications),
            Arc::new(BookingCreationWorkflow::new(submitter)),
            catalog,
        )
    }

    /// Returns the provider and service type catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the creation workflow of the dashboard.
    #[must_use]
    pub fn workflow(&self) -> &Arc<BookingCreationWorkflow> {
        &self.workflow
    }

    // ── Bookings ────────────────────────────────────────────────────────

    /// Lists bookings for `view`, grouped relative to `now`.
    pub async fn list_bookings(&self, view: BookingView, now: DateTime<Utc>) -> Vec<Booking> {
        let bookings = self.bookings.list().await;
        match view {
            BookingView::All => bookings,
            BookingView::Upcoming => bookings
                .into_iter()
                .filter(|b| is_upcoming(b, now))
                .collect(),
            BookingView::Past => bookings.into_iter().filter(|b| is_past(b, now)).collect(),
        }
    }

    /// Returns a single booking.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::BookingNotFound`] if it does not exist.
    pub async fn get_booking(&self, id: BookingId) -> Result<Booking, DashboardError> {
        self.bookings.get(id).await
    }

    /// Sets a booking's status.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::BookingNotFound`] if it does not exist.
    pub async fn update_booking_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, DashboardError> {
        let booking = self.bookings.update_status(id, status).await?;
        tracing::info!(booking_id = %id, %status, "booking status updated");
        Ok(booking)
    }

    /// Per-status counts over the current bookings.
    pub async fn stats(&self) -> BookingStats {
        BookingStats::aggregate(&self.bookings.list().await)
    }

    /// Stats and both booking groups relative to `now`.
    pub async fn snapshot(&self, now: DateTime<Utc>) -> DashboardSnapshot {
        let bookings = self.bookings.list().await;
        DashboardSnapshot {
            generated_at: now,
            stats: BookingStats::aggregate(&bookings),
            partition: BookingPartition::split(&bookings, now),
        }
    }

    /// Submits a booking draft through the creation workflow.
    ///
    /// # Errors
    ///
    /// See [`BookingCreationWorkflow::submit`].
    pub async fn submit_booking(
        &self,
        draft: BookingDraft,
    ) -> Result<SubmissionOutcome, DashboardError> {
        self.workflow.submit_draft(draft).await
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Returns all notifications with their unread count.
    pub async fn notification_feed(&self) -> NotificationFeed {
        self.notifications.feed().await
    }

    /// Appends a notification from an emitter.
    pub async fn push_notification(&self, event: NotificationEvent) {
        tracing::debug!(notification_id = %event.id, kind = event.kind.as_str(), "notification added");
        self.notifications.push(event).await;
    }

    /// Marks one notification as read. Unknown ids are ignored.
    pub async fn mark_notification_read(&self, id: NotificationId) {
        if !self.notifications.mark_as_read(id).await {
            tracing::debug!(notification_id = %id, "mark-as-read for unknown notification ignored");
        }
    }

    /// Marks every notification as read.
    pub async fn mark_all_notifications_read(&self) {
        self.notifications.mark_all_as_read().await;
    }

    /// Dismisses a notification. Unknown ids are ignored.
    pub async fn remove_notification(&self, id: NotificationId) {
        if !self.notifications.remove(id).await {
            tracing::debug!(notification_id = %id, "remove for unknown notification ignored");
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::time::Duration as StdDuration;

    use super::*;
    use crate::domain::test_support::booking_at;
    use crate::domain::{NotificationKind, UserId};
    use crate::service::creation::WorkflowState;
    use chrono::Duration;

    fn service_with(bookings: Vec<Booking>) -> DashboardService {
        let repository: Arc<dyn BookingRepository> =
            Arc::new(InMemoryBookingRepository::with_bookings(bookings));
        let workflow = BookingCreationWorkflow::new(Arc::new(SimulatedSubmitter::new(
            StdDuration::from_millis(1500),
        )));
        DashboardService::new(
            repository,
            Arc::new(NotificationStore::new()),
            Arc::new(workflow),
            Catalog::standard(),
        )
    }

    fn fixture(now: DateTime<Utc>) -> Vec<Booking> {
        vec![
            booking_at(1, BookingStatus::Pending, now + Duration::hours(1)),
            booking_at(2, BookingStatus::Completed, now - Duration::hours(1)),
            booking_at(3, BookingStatus::Cancelled, now + Duration::hours(2)),
        ]
    }

    fn ids(bookings: &[Booking]) -> Vec<u128> {
        bookings.iter().map(|b| b.id.as_uuid().as_u128()).collect()
    }

    #[tokio::test]
    async fn snapshot_end_to_end() {
        let now = Utc::now();
        let service = service_with(fixture(now));

        let snapshot = service.snapshot(now).await;
        assert_eq!(ids(&snapshot.partition.upcoming), vec![1]);
        assert_eq!(ids(&snapshot.partition.past), vec![2]);
        assert_eq!(
            snapshot.stats,
            BookingStats {
                total: 3,
                pending: 1,
                confirmed: 0,
                completed: 1,
                cancelled: 1,
            }
        );
    }

    #[tokio::test]
    async fn list_bookings_by_view() {
        let now = Utc::now();
        let service = service_with(fixture(now));
        assert_eq!(ids(&service.list_bookings(BookingView::All, now).await), vec![1, 2, 3]);
        assert_eq!(ids(&service.list_bookings(BookingView::Upcoming, now).await), vec![1]);
        assert_eq!(ids(&service.list_bookings(BookingView::Past, now).await), vec![2]);
    }

    #[tokio::test]
    async fn stats_follow_status_updates() {
        let now = Utc::now();
        let service = service_with(fixture(now));
        let id = BookingId::from_uuid(uuid::Uuid::from_u128(1));

        let Ok(updated) = service.update_booking_status(id, BookingStatus::Confirmed).await else {
            panic!("update failed");
        };
        assert_eq!(updated.status, BookingStatus::Confirmed);

        let stats = service.stats().await;
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.confirmed, 1);
        assert_eq!(stats.total, 3);
    }

    #[tokio::test]
    async fn unknown_booking_is_not_found() {
        let service = service_with(Vec::new());
        let result = service.get_booking(BookingId::new()).await;
        assert!(matches!(result, Err(DashboardError::BookingNotFound(_))));
        let result = service
            .update_booking_status(BookingId::new(), BookingStatus::Cancelled)
            .await;
        assert!(matches!(result, Err(DashboardError::BookingNotFound(_))));
    }

    #[tokio::test]
    async fn notification_operations() {
        let service = service_with(Vec::new());
        let event = NotificationEvent::new(
            NotificationKind::BookingUpdated,
            "Appointment Rescheduled",
            "Moved to 4:00 PM",
            Utc::now(),
        );
        let id = event.id;
        service.push_notification(event).await;
        let feed = service.notification_feed().await;
        assert_eq!(feed.unread_count, 1);
        assert_eq!(feed.badge_label().as_deref(), Some("1"));

        service.mark_notification_read(NotificationId::new()).await;
        assert_eq!(service.notification_feed().await.unread_count, 1);

        service.mark_notification_read(id).await;
        assert_eq!(service.notification_feed().await.unread_count, 0);

        service.remove_notification(NotificationId::new()).await;
        assert_eq!(service.notification_feed().await.events.len(), 1);
        service.remove_notification(id).await;
        assert!(service.notification_feed().await.events.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_submission_does_not_touch_store() {
        let now = Utc::now();
        let service = service_with(fixture(now));
        let draft = BookingDraft {
            provider_id: "provider1".to_string(),
            service_type: "Follow-up Appointment".to_string(),
            date: "2026-12-01".to_string(),
            start_time: "10:00".to_string(),
            end_time: "10:30".to_string(),
            notes: String::new(),
        };

        let Ok(outcome) = service.submit_booking(draft).await else {
            panic!("submission should succeed");
        };
        assert!(outcome.close_dialog);
        assert_eq!(service.stats().await.total, 3);
        assert_eq!(service.workflow().state(), WorkflowState::Idle);
    }

    #[tokio::test]
    async fn from_config_seeds_demo_data() {
        let config = DashboardConfig::default();
        let service = DashboardService::from_config(&config);
        assert_eq!(service.stats().await.total, 3);
        assert_eq!(service.notification_feed().await.unread_count, 2);

        let unseeded = DashboardService::from_config(&DashboardConfig {
            seed_demo_data: false,
            ..DashboardConfig::default()
        });
        assert_eq!(unseeded.stats().await.total, 0);
        assert!(unseeded.notification_feed().await.events.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn repository_mode_appends_created_booking() {
        let config = DashboardConfig {
            seed_demo_data: false,
            submit_mode: SubmitMode::Repository,
            user_id: UserId::from_uuid(uuid::Uuid::from_u128(42)),
            ..DashboardConfig::default()
        };
        let service = DashboardService::from_config(&config);
        let draft = BookingDraft {
            provider_id: "provider2".to_string(),
            service_type: "Dental Cleaning".to_string(),
            date: "2099-01-15".to_string(),
            start_time: "14:30".to_string(),
            end_time: "15:30".to_string(),
            notes: String::new(),
        };

        let Ok(outcome) = service.submit_booking(draft).await else {
            panic!("submission should succeed");
        };
        let Some(created) = outcome.booking else {
            panic!("expected stored booking");
        };
        assert_eq!(created.user_id, config.user_id);

        let stats = service.stats().await;
        assert_eq!(stats.total, 1);
        assert_eq!(stats.pending, 1);
        let upcoming = service.list_bookings(BookingView::Upcoming, Utc::now()).await;
        assert_eq!(upcoming.len(), 1);
    }
}
