//! Booking handlers: list, get, status update, creation workflow, stats.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, patch};
use axum::{Json, Router};
use chrono::Utc;

use crate::api::dto::{
    BookingListParams, BookingListResponse, UpdateStatusRequest, WorkflowResponse,
};
use crate::app_state::AppState;
use crate::domain::{Booking, BookingDraft, BookingId, BookingStats};
use crate::error::{DashboardError, ErrorResponse};
use crate::service::{DashboardSnapshot, SubmissionOutcome};

/// `GET /bookings` — List bookings, optionally only upcoming or past.
#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "Bookings",
    summary = "List bookings",
    description = "Returns bookings in store order. `view=upcoming` keeps bookings that start later and are not cancelled; `view=past` keeps bookings that already started or are completed. The two views may overlap.",
    params(BookingListParams),
    responses(
        (status = 200, description = "Booking list", body = BookingListResponse),
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(params): Query<BookingListParams>,
) -> impl IntoResponse {
    let data = state
        .dashboard
        .list_bookings(params.view, Utc::now())
        .await;
    Json(BookingListResponse {
        view: params.view,
        total: data.len(),
        data,
    })
}

/// `GET /bookings/{id}` — Get a single booking.
///
/// # Errors
///
/// Returns [`DashboardError::BookingNotFound`] if the booking does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}",
    tag = "Bookings",
    summary = "Get booking",
    params(
        ("id" = uuid::Uuid, Path, description = "Booking UUID"),
    ),
    responses(
        (status = 200, description = "Booking", body = Booking),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<Booking>, DashboardError> {
    let booking = state
        .dashboard
        .get_booking(BookingId::from_uuid(id))
        .await?;
    Ok(Json(booking))
}

/// `PATCH /bookings/{id}/status` — Change a booking's status.
///
/// # Errors
///
/// Returns [`DashboardError::BookingNotFound`] if the booking does not exist.
#[utoipa::path(
    patch,
    path = "/api/v1/bookings/{id}/status",
    tag = "Bookings",
    summary = "Update booking status",
    description = "Sets the status (e.g. `cancelled` for the dashboard's Cancel action). Transitions are not restricted.",
    params(
        ("id" = uuid::Uuid, Path, description = "Booking UUID"),
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Updated booking", body = Booking),
        (status = 404, description = "Booking not found", body = ErrorResponse),
    )
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<Booking>, DashboardError> {
    let booking = state
        .dashboard
        .update_booking_status(BookingId::from_uuid(id), req.status)
        .await?;
    Ok(Json(booking))
}

/// `POST /bookings` — Submit the booking creation form.
///
/// # Errors
///
/// Returns [`DashboardError::MissingFields`], [`DashboardError::SubmissionInFlight`],
/// or [`DashboardError::SubmissionFailed`].
#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "Bookings",
    summary = "Create booking",
    description = "Validates the draft and runs the create action. Only one submission may be in flight; a concurrent request gets 409.",
    request_body = BookingDraft,
    responses(
        (status = 202, description = "Booking accepted, pending confirmation", body = SubmissionOutcome),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 409, description = "Submission already in progress", body = ErrorResponse),
        (status = 502, description = "Create action failed", body = ErrorResponse),
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(draft): Json<BookingDraft>,
) -> Result<impl IntoResponse, DashboardError> {
    let outcome = state.dashboard.submit_booking(draft).await?;
    Ok((StatusCode::ACCEPTED, Json(outcome)))
}

/// `GET /bookings/workflow` — Creation workflow state and current draft.
#[utoipa::path(
    get,
    path = "/api/v1/bookings/workflow",
    tag = "Bookings",
    summary = "Creation workflow state",
    responses(
        (status = 200, description = "Workflow state", body = WorkflowResponse),
    )
)]
pub async fn workflow_state(State(state): State<AppState>) -> impl IntoResponse {
    let workflow = state.dashboard.workflow();
    Json(WorkflowResponse {
        state: workflow.state(),
        draft: workflow.draft().await,
    })
}

/// `GET /stats` — Booking counts per status.
#[utoipa::path(
    get,
    path = "/api/v1/stats",
    tag = "Dashboard",
    summary = "Booking statistics",
    responses(
        (status = 200, description = "Per-status counts", body = BookingStats),
    )
)]
pub async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.dashboard.stats().await)
}

/// `GET /dashboard` — Stats plus upcoming and past bookings.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "Dashboard",
    summary = "Dashboard snapshot",
    responses(
        (status = 200, description = "Stats and booking groups", body = DashboardSnapshot),
    )
)]
pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.dashboard.snapshot(Utc::now()).await)
}

/// Booking and dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", get(list_bookings).post(create_booking))
        .route("/bookings/workflow", get(workflow_state))
        .route("/bookings/{id}", get(get_booking))
        .route("/bookings/{id}/status", patch(update_booking_status))
        .route("/stats", get(stats))
        .route("/dashboard", get(dashboard))
}
