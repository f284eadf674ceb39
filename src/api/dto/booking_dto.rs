//! Booking-related DTOs for list, status update, and workflow endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Booking, BookingDraft, BookingStatus};
use crate::service::{BookingView, WorkflowState};

/// Query parameters for `GET /bookings`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookingListParams {
    /// `all` (default), `upcoming`, or `past`.
    #[serde(default)]
    #[param(value_type = Option<BookingView>)]
    pub view: BookingView,
}

/// Response body for `GET /bookings`.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingListResponse {
    /// View the list was filtered by.
    pub view: BookingView,
    /// Number of bookings returned.
    pub total: usize,
    /// Bookings in store order.
    pub data: Vec<Booking>,
}

/// Request body for `PATCH /bookings/{id}/status`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    /// New status.
    pub status: BookingStatus,
}

/// Response body for `GET /bookings/workflow`.
#[derive(Debug, Serialize, ToSchema)]
pub struct WorkflowResponse {
    /// `idle` or `submitting`.
    pub state: WorkflowState,
    /// Current draft of the creation dialog.
    pub draft: BookingDraft,
}
