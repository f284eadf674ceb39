//! Catalog handlers: providers and service types for the creation form.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::app_state::AppState;
use crate::domain::Provider;

/// `GET /catalog/providers` — Bookable providers.
#[utoipa::path(
    get,
    path = "/api/v1/catalog/providers",
    tag = "Catalog",
    summary = "List providers",
    responses(
        (status = 200, description = "Providers", body = Vec<Provider>),
    )
)]
pub async fn providers(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.dashboard.catalog().providers().to_vec())
}

/// `GET /catalog/service-types` — Offered service types.
#[utoipa::path(
    get,
    path = "/api/v1/catalog/service-types",
    tag = "Catalog",
    summary = "List service types",
    responses(
        (status = 200, description = "Service types", body = Vec<String>),
    )
)]
pub async fn service_types(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.dashboard.catalog().service_types().to_vec())
}

/// Catalog routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/catalog/providers", get(providers))
        .route("/catalog/service-types", get(service_types))
}
