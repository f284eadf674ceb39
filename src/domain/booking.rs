//! Booking records, their status lifecycle, and creation requests.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{BookingId, UserId};
use crate::error::DashboardError;

/// Wire format of [`CreateBookingRequest`] start and end times.
pub const WIRE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Booking status.
///
/// The lifecycle `pending → confirmed → completed`, or `→ cancelled` from
/// any open state, is implicit: stores do not reject other transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Requested, awaiting provider confirmation.
    Pending,
    /// Accepted by the provider.
    Confirmed,
    /// Called off by either party.
    Cancelled,
    /// Appointment took place.
    Completed,
}

impl BookingStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Returns the status as a static string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Returns `true` if moving from `self` to `next` follows the usual
    /// lifecycle. Setting the current status again counts as a follow.
    #[must_use]
    pub const fn follows_lifecycle(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Pending | Self::Confirmed | Self::Cancelled)
                | (Self::Confirmed, Self::Confirmed | Self::Completed | Self::Cancelled)
                | (Self::Completed, Self::Completed)
                | (Self::Cancelled, Self::Cancelled)
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Denormalized provider snapshot stored on a booking for display.
///
/// Owned by the booking; never synchronized back to a provider record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProviderSummary {
    /// Provider identifier.
    pub id: String,
    /// Provider display name.
    pub name: String,
    /// Optional avatar reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A scheduled appointment between a user and a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique booking identifier.
    pub id: BookingId,
    /// Booking user (not owned).
    pub user_id: UserId,
    /// Provider reference (not owned).
    pub provider_id: String,
    /// Free-text service label, e.g. `"Dental Cleaning"`.
    pub service_type: String,
    /// Appointment start.
    pub start_time: DateTime<Utc>,
    /// Appointment end. Expected after `start_time`, not enforced.
    pub end_time: DateTime<Utc>,
    /// Current status.
    pub status: BookingStatus,
    /// Optional notes from the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// Provider snapshot for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderSummary>,
}

/// Request to create a booking. Consumed once to produce a [`Booking`].
///
/// Times travel as strings in [`WIRE_TIME_FORMAT`] and are interpreted
/// as UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Selected provider.
    pub provider_id: String,
    /// Selected service type.
    pub service_type: String,
    /// Start time, `YYYY-MM-DDTHH:MM`.
    pub start_time: String,
    /// End time, `YYYY-MM-DDTHH:MM`.
    pub end_time: String,
    /// Optional notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CreateBookingRequest {
    /// Parses the start and end wire strings.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidRequest`] if either time does not
    /// match [`WIRE_TIME_FORMAT`].
    pub fn parse_times(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), DashboardError> {
        Ok((
            parse_wire_time("startTime", &self.start_time)?,
            parse_wire_time("endTime", &self.end_time)?,
        ))
    }
}

impl Booking {
    /// Builds a `pending` booking from a creation request.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidRequest`] if the request times do
    /// not parse.
    pub fn from_request(
        request: &CreateBookingRequest,
        user_id: UserId,
        provider: Option<ProviderSummary>,
        now: DateTime<Utc>,
    ) -> Result<Self, DashboardError> {
        let (start_time, end_time) = request.parse_times()?;
        Ok(Self {
            id: BookingId::new(),
            user_id,
            provider_id: request.provider_id.clone(),
            service_type: request.service_type.clone(),
            start_time,
            end_time,
            status: BookingStatus::Pending,
            notes: request.notes.clone(),
            created_at: now,
            updated_at: now,
            provider,
        })
    }
}

fn parse_wire_time(field: &str, value: &str) -> Result<DateTime<Utc>, DashboardError> {
    NaiveDateTime::parse_from_str(value, WIRE_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| DashboardError::InvalidRequest(format!("invalid {field} {value:?}: {e}")))
}

/// Form data of the booking creation dialog.
///
/// Every field starts empty. `date` is `YYYY-MM-DD`; `start_time` and
/// `end_time` are `HH:MM`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDraft {
    /// Selected provider id.
    pub provider_id: String,
    /// Selected service type.
    pub service_type: String,
    /// Appointment date.
    pub date: String,
    /// Appointment start time of day.
    pub start_time: String,
    /// Appointment end time of day.
    pub end_time: String,
    /// Free-form notes; optional.
    pub notes: String,
}

impl BookingDraft {
    /// Returns the wire names of required fields that are blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("providerId", &self.provider_id),
            ("serviceType", &self.service_type),
            ("date", &self.date),
            ("startTime", &self.start_time),
            ("endTime", &self.end_time),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Builds the [`CreateBookingRequest`] for this draft.
    ///
    /// Blank notes are dropped. Does not validate; see
    /// [`Self::missing_fields`].
    #[must_use]
    pub fn to_request(&self) -> CreateBookingRequest {
        let notes = self.notes.trim();
        CreateBookingRequest {
            provider_id: self.provider_id.trim().to_string(),
            service_type: self.service_type.trim().to_string(),
            start_time: format!("{}T{}", self.date.trim(), self.start_time.trim()),
            end_time: format!("{}T{}", self.date.trim(), self.end_time.trim()),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        }
    }
}
