//! Notification handlers: list, mark read, mark all read, dismiss.
//!
//! Mark and dismiss never fail on unknown ids; they answer 204 either way.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::Utc;

use crate::api::dto::{NotificationDto, NotificationListResponse};
use crate::app_state::AppState;
use crate::domain::NotificationId;

/// `GET /notifications` — List notifications with unread count and badge.
#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    tag = "Notifications",
    summary = "List notifications",
    responses(
        (status = 200, description = "Notifications", body = NotificationListResponse),
    )
)]
pub async fn list_notifications(State(state): State<AppState>) -> impl IntoResponse {
    let now = Utc::now();
    let feed = state.dashboard.notification_feed().await;
    let badge = feed.badge_label();
    let data = feed
        .events
        .into_iter()
        .map(|event| NotificationDto::new(event, now))
        .collect();
    Json(NotificationListResponse {
        data,
        unread_count: feed.unread_count,
        badge,
    })
}

/// `POST /notifications/{id}/read` — Mark one notification as read.
#[utoipa::path(
    post,
    path = "/api/v1/notifications/{id}/read",
    tag = "Notifications",
    summary = "Mark notification read",
    params(
        ("id" = uuid::Uuid, Path, description = "Notification UUID"),
    ),
    responses(
        (status = 204, description = "Marked (or unknown id ignored)"),
    )
)]
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> impl IntoResponse {
    state
        .dashboard
        .mark_notification_read(NotificationId::from_uuid(id))
        .await;
    StatusCode::NO_CONTENT
}

/// `POST /notifications/read-all` — Mark every notification as read.
#[utoipa::path(
    post,
    path = "/api/v1/notifications/read-all",
    tag = "Notifications",
    summary = "Mark all notifications read",
    responses(
        (status = 204, description = "All marked read"),
    )
)]
pub async fn mark_all_read(State(state): State<AppState>) -> impl IntoResponse {
    state.dashboard.mark_all_notifications_read().await;
    StatusCode::NO_CONTENT
}

/// `DELETE /notifications/{id}` — Dismiss a notification.
#[utoipa::path(
    delete,
    path = "/api/v1/notifications/{id}",
    tag = "Notifications",
    summary = "Dismiss notification",
    params(
        ("id" = uuid::Uuid, Path, description = "Notification UUID"),
    ),
    responses(
        (status = 204, description = "Removed (or unknown id ignored)"),
    )
)]
pub async fn remove_notification(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> impl IntoResponse {
    state
        .dashboard
        .remove_notification(NotificationId::from_uuid(id))
        .await;
    StatusCode::NO_CONTENT
}

/// Notification routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(list_notifications))
        .route("/notifications/read-all", post(mark_all_read))
        .route("/notifications/{id}", delete(remove_notification))
        .route("/notifications/{id}/read", post(mark_read))
}
