//! Upcoming / past grouping of bookings.
//!
//! The two groups are computed by independent predicates. A future
//! `completed` booking lands in both lists; a future `cancelled` booking
//! lands in neither. Callers must not assume the groups are disjoint or
//! exhaustive.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Booking, BookingStatus};

/// Returns `true` if the booking starts after `now` and is not cancelled.
#[must_use]
pub fn is_upcoming(booking: &Booking, now: DateTime<Utc>) -> bool {
    booking.start_time > now && booking.status != BookingStatus::Cancelled
}

/// Returns `true` if the booking started at or before `now`, or is completed.
#[must_use]
pub fn is_past(booking: &Booking, now: DateTime<Utc>) -> bool {
    booking.start_time <= now || booking.status == BookingStatus::Completed
}

/// Bookings grouped for display. Each list keeps source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookingPartition {
    /// Bookings matching [`is_upcoming`].
    pub upcoming: Vec<Booking>,
    /// Bookings matching [`is_past`].
    pub past: Vec<Booking>,
}

impl BookingPartition {
    /// Groups `bookings` relative to `now`.
    #[must_use]
    pub fn split(bookings: &[Booking], now: DateTime<Utc>) -> Self {
        Self {
            upcoming: bookings
                .iter()
                .filter(|b| is_upcoming(b, now))
                .cloned()
                .collect(),
            past: bookings.iter().filter(|b| is_past(b, now)).cloned().collect(),
        }
    }
}
