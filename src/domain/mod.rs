//! Domain layer: booking and notification model, stores, and derived views.
//!
//! Bookings live behind the [`BookingRepository`] seam. Stats and the
//! upcoming/past grouping are pure functions over booking slices, so
//! they never depend on where the bookings are stored.

pub mod booking;
pub mod booking_store;
pub mod catalog;
pub mod ids;
pub mod notification;
pub mod notification_store;
pub mod partition;
pub mod seed;
pub mod stats;
pub mod user;

pub use booking::{Booking, BookingDraft, BookingStatus, CreateBookingRequest, ProviderSummary};
pub use booking_store::{BookingRepository, InMemoryBookingRepository};
pub use catalog::{Catalog, Provider};
pub use ids::{BookingId, NotificationId, UserId};
pub use notification::{NotificationEvent, NotificationKind, relative_time};
pub use notification_store::{NotificationFeed, NotificationStore};
pub use partition::{BookingPartition, is_past, is_upcoming};
pub use stats::BookingStats;
pub use user::{User, UserRole};

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, Duration, Utc};

    use super::{Booking, BookingId, BookingStatus, UserId};

    /// One-hour booking with a numeric id, starting at `start`.
    pub(crate) fn booking_at(id: u128, status: BookingStatus, start: DateTime<Utc>) -> Booking {
        Booking {
            id: BookingId::from_uuid(uuid::Uuid::from_u128(id)),
            user_id: UserId::from_uuid(uuid::Uuid::from_u128(100)),
            provider_id: "provider1".to_string(),
            service_type: "Medical Consultation".to_string(),
            start_time: start,
            end_time: start + Duration::hours(1),
            status,
            notes: None,
            created_at: start - Duration::days(1),
            updated_at: start - Duration::days(1),
            provider: None,
        }
    }
}
