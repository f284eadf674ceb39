//! Dashboard error types with HTTP status code mapping.
//!
//! [`DashboardError`] is the central error type. Each variant maps to a
//! numeric code and HTTP status, and renders as a structured JSON body.
//! Every failure is recoverable and reported to the caller; none leaves
//! a store or the creation workflow in a partial state.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::BookingId;

/// Structured JSON error response body.
///
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "missing required fields: providerId",
///     "details": "providerId"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                  |
/// |-----------|-----------------|------------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request              |
/// | 2000–2999 | State/Not Found | 404 Not Found / 409 Conflict |
/// | 3000–3999 | Upstream        | 502 Bad Gateway              |
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Required booking draft fields are blank.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Request could not be interpreted.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Booking with the given id was not found.
    #[error("booking not found: {0}")]
    BookingNotFound(BookingId),

    /// A booking submission is already running for this workflow.
    #[error("a booking submission is already in progress")]
    SubmissionInFlight,

    /// The create action failed.
    #[error("booking submission failed: {0}")]
    SubmissionFailed(String),
}

impl DashboardError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::MissingFields(_) => 1001,
            Self::InvalidRequest(_) => 1002,
            Self::BookingNotFound(_) => 2001,
            Self::SubmissionInFlight => 2002,
            Self::SubmissionFailed(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields(_) | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::BookingNotFound(_) => StatusCode::NOT_FOUND,
            Self::SubmissionInFlight => StatusCode::CONFLICT,
            Self::SubmissionFailed(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            Self::MissingFields(fields) => Some(fields.join(",")),
            _ => None,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: self.details(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
