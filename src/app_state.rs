//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::DashboardService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Dashboard service for all business logic.
    pub dashboard: Arc<DashboardService>,
}

impl AppState {
    /// Wraps a service for use as router state.
    #[must_use]
    pub fn new(dashboard: DashboardService) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
        }
    }
}
