//! Providers and service types offered by the booking dialog.

use serde::Serialize;
use utoipa::ToSchema;

use super::ProviderSummary;

/// Placeholder avatar used for catalog providers.
pub const PLACEHOLDER_AVATAR: &str = "/api/placeholder/40/40";

/// A bookable provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Provider {
    /// Provider identifier referenced by bookings.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Field of practice.
    pub specialty: String,
}

impl Provider {
    fn new(id: &str, name: &str, specialty: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            specialty: specialty.to_string(),
        }
    }

    /// Snapshot stored on bookings made with this provider.
    #[must_use]
    pub fn summary(&self) -> ProviderSummary {
        ProviderSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            avatar: Some(PLACEHOLDER_AVATAR.to_string()),
        }
    }
}

/// Read-only directory of providers and service types.
#[derive(Debug, Clone)]
pub struct Catalog {
    providers: Vec<Provider>,
    service_types: Vec<String>,
}

impl Catalog {
    /// The catalog shipped with the dashboard.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            providers: vec![
                Provider::new("provider1", "Dr. Sarah Wilson", "General Medicine"),
                Provider::new("provider2", "Dr. Michael Chen", "Dentistry"),
                Provider::new("provider3", "Dr. Emily Rodriguez", "Psychology"),
                Provider::new("provider4", "Dr. James Thompson", "Dermatology"),
            ],
            service_types: [
                "Medical Consultation",
                "Dental Cleaning",
                "Therapy Session",
                "Dermatology Check",
                "Follow-up Appointment",
                "Emergency Consultation",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }

    /// All providers in display order.
    #[must_use]
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// All service types in display order.
    #[must_use]
    pub fn service_types(&self) -> &[String] {
        &self.service_types
    }

    /// Looks up a provider by id.
    #[must_use]
    pub fn provider(&self, id: &str) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
