//! Per-status booking counts.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Booking, BookingStatus};

/// Count of bookings per status plus the total.
///
/// Always derived from a booking collection through [`BookingStats::aggregate`];
/// never mutated on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookingStats {
    /// Number of bookings.
    pub total: usize,
    /// Bookings awaiting confirmation.
    pub pending: usize,
    /// Confirmed bookings.
    pub confirmed: usize,
    /// Completed bookings.
    pub completed: usize,
    /// Cancelled bookings.
    pub cancelled: usize,
}

impl BookingStats {
    /// Counts `bookings` by status. An empty slice yields all zeros.
    #[must_use]
    pub fn aggregate(bookings: &[Booking]) -> Self {
        bookings.iter().fold(
            Self {
                total: bookings.len(),
                ..Self::default()
            },
            |mut stats, booking| {
                let slot = match booking.status {
                    BookingStatus::Pending => &mut stats.pending,
                    BookingStatus::Confirmed => &mut stats.confirmed,
                    BookingStatus::Completed => &mut stats.completed,
                    BookingStatus::Cancelled => &mut stats.cancelled,
                };
                *slot = slot.saturating_add(1);
                stats
            },
        )
    }

    /// Returns the count for a single status.
    #[must_use]
    pub const fn count(&self, status: BookingStatus) -> usize {
        match status {
            BookingStatus::Pending => self.pending,
            BookingStatus::Confirmed => self.confirmed,
            BookingStatus::Completed => self.completed,
            BookingStatus::Cancelled => self.cancelled,
        }
    }
}
