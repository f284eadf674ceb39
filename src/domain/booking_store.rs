//! Booking storage behind a repository seam.
//!
//! [`BookingRepository`] is what the service layer talks to; the in-memory
//! [`InMemoryBookingRepository`] holds the session's bookings in insertion
//! order. A real backend replaces it without touching stats or grouping.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{Booking, BookingId, BookingStatus};
use crate::error::DashboardError;

/// Storage operations for bookings.
#[async_trait]
pub trait BookingRepository: Send + Sync + std::fmt::Debug {
    /// Returns every booking in insertion order.
    async fn list(&self) -> Vec<Booking>;

    /// Returns the booking with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::BookingNotFound`] if it does not exist.
    async fn get(&self, id: BookingId) -> Result<Booking, DashboardError>;

    /// Stores a new booking and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidRequest`] if a booking with the
    /// same id already exists.
    async fn create(&self, booking: Booking) -> Result<Booking, DashboardError>;

    /// Sets the status of a booking and refreshes its `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::BookingNotFound`] if it does not exist.
    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, DashboardError>;
}

/// Session-local booking store.
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<Vec<Booking>>,
}

impl InMemoryBookingRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `bookings` in the given order.
    #[must_use]
    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: RwLock::new(bookings),
        }
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.bookings.read().await.len()
    }

    #[cfg(test)]
    async fn is_empty(&self) -> bool {
        self.bookings.read().await.is_empty()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn list(&self) -> Vec<Booking> {
        self.bookings.read().await.clone()
    }

    async fn get(&self, id: BookingId) -> Result<Booking, DashboardError> {
        self.bookings
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(DashboardError::BookingNotFound(id))
    }

    async fn create(&self, booking: Booking) -> Result<Booking, DashboardError> {
        let mut bookings = self.bookings.write().await;
        if bookings.iter().any(|b| b.id == booking.id) {
            return Err(DashboardError::InvalidRequest(format!(
                "booking {} already exists",
                booking.id
            )));
        }
        bookings.push(booking.clone());
        Ok(booking)
    }

    async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, DashboardError> {
        let mut bookings = self.bookings.write().await;
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(DashboardError::BookingNotFound(id))?;

        if !booking.status.follows_lifecycle(status) {
            tracing::warn!(
                booking_id = %id,
                from = %booking.status,
                to = %status,
                "status change outside the usual lifecycle"
            );
        }
        booking.status = status;
        booking.updated_at = Utc::now();
        Ok(booking.clone())
    }
}
