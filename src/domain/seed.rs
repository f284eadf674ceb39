//! Demo data loaded into the stores at start-up.
//!
//! Times are anchored on the start-up instant so the upcoming and past
//! groups and the relative-time labels stay meaningful.

use chrono::{DateTime, Duration, Utc};

use super::{
    Booking, BookingId, BookingStatus, Catalog, NotificationEvent, NotificationKind, UserId,
};

struct SeedBooking {
    provider_id: &'static str,
    service_type: &'static str,
    start_offset: Duration,
    status: BookingStatus,
    notes: &'static str,
    created_offset: Duration,
}

/// Demo bookings for `user_id`: one confirmed and one pending in the
/// future, one completed in the past.
#[must_use]
pub fn demo_bookings(catalog: &Catalog, user_id: UserId, now: DateTime<Utc>) -> Vec<Booking> {
    let seeds = [
        SeedBooking {
            provider_id: "provider1",
            service_type: "Medical Consultation",
            start_offset: Duration::days(2),
            status: BookingStatus::Confirmed,
            notes: "Annual checkup appointment",
            created_offset: Duration::days(-3),
        },
        SeedBooking {
            provider_id: "provider2",
            service_type: "Dental Cleaning",
            start_offset: Duration::days(4) + Duration::minutes(270),
            status: BookingStatus::Pending,
            notes: "Regular cleaning appointment",
            created_offset: Duration::hours(-20),
        },
        SeedBooking {
            provider_id: "provider3",
            service_type: "Therapy Session",
            start_offset: Duration::days(-2),
            status: BookingStatus::Completed,
            notes: "Weekly therapy session",
            created_offset: Duration::days(-9),
        },
    ];

    seeds
        .into_iter()
        .map(|seed| {
            let start_time = now + seed.start_offset;
            let created_at = now + seed.created_offset;
            let updated_at = if seed.status == BookingStatus::Completed {
                start_time + Duration::hours(1)
            } else {
                created_at
            };
            Booking {
                id: BookingId::new(),
                user_id,
                provider_id: seed.provider_id.to_string(),
                service_type: seed.service_type.to_string(),
                start_time,
                end_time: start_time + Duration::hours(1),
                status: seed.status,
                notes: Some(seed.notes.to_string()),
                created_at,
                updated_at,
                provider: catalog.provider(seed.provider_id).map(|p| p.summary()),
            }
        })
        .collect()
}

/// Demo notifications: two unread (5 minutes and 2 hours old) and two
/// read (1 and 3 days old).
#[must_use]
pub fn demo_notifications(now: DateTime<Utc>) -> Vec<NotificationEvent> {
    let mut events = vec![
        NotificationEvent::new(
            NotificationKind::BookingReminder,
            "Appointment Reminder",
            "Your appointment with Dr. Sarah Wilson starts in 10 minutes",
            now - Duration::minutes(5),
        ),
        NotificationEvent::new(
            NotificationKind::BookingCreated,
            "Booking Confirmed",
            "Your dental cleaning appointment has been confirmed for tomorrow at 2:30 PM",
            now - Duration::hours(2),
        ),
        NotificationEvent::new(
            NotificationKind::BookingUpdated,
            "Appointment Rescheduled",
            "Dr. Emily Rodriguez has moved your therapy session to 4:00 PM",
            now - Duration::days(1),
        ),
        NotificationEvent::new(
            NotificationKind::BookingCreated,
            "New Booking Request",
            "You have a new appointment request pending approval",
            now - Duration::days(3),
        ),
    ];
    for event in events.iter_mut().skip(2) {
        event.read = true;
    }
    events
}
