//! Users as issued by the external identity source.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserId;

/// Role a user holds in the booking system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Service-rendering party.
    Provider,
    /// Back-office administrator.
    Admin,
    /// Regular customer booking appointments.
    User,
}

/// Authenticated user. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// User identifier.
    pub id: UserId,
    /// Contact email.
    pub email: String,
    /// Role in the system.
    pub role: UserRole,
    /// Display name.
    pub name: String,
    /// Optional avatar reference (URL or path).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
