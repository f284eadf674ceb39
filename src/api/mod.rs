//! REST API layer: route handlers, DTOs, OpenAPI document, and router
//! composition.
//!
//! All resource endpoints are mounted under `/api/v1`.

pub mod dto;
pub mod handlers;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document for every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "booking-dashboard",
        description = "Bookings, stats, notifications, and booking creation for the dashboard."
    ),
    paths(
        handlers::bookings::list_bookings,
        handlers::bookings::get_booking,
        handlers::bookings::update_booking_status,
        handlers::bookings::create_booking,
        handlers::bookings::workflow_state,
        handlers::bookings::stats,
        handlers::bookings::dashboard,
        handlers::notifications::list_notifications,
        handlers::notifications::mark_read,
        handlers::notifications::mark_all_read,
        handlers::notifications::remove_notification,
        handlers::catalog::providers,
        handlers::catalog::service_types,
        handlers::system::health_handler,
    ),
    tags(
        (name = "Bookings", description = "Booking list, status, and creation"),
        (name = "Dashboard", description = "Derived statistics and groupings"),
        (name = "Notifications", description = "Read state and dismissal"),
        (name = "Catalog", description = "Providers and service types"),
        (name = "System", description = "Health"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}

/// Builds the router with HTTP tracing, permissive CORS, and `state`.
pub fn build_app(state: AppState) -> Router {
    build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
