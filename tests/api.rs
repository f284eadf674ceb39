//! HTTP-level tests for the dashboard router.

#![allow(clippy::panic, clippy::indexing_slicing)]

use std::sync::Arc;
use std::time::Duration as StdDuration;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use chrono::{Duration, Utc};
use serde_json::{Value, json};
use tower::ServiceExt;

use booking_dashboard::api::build_app;
use booking_dashboard::app_state::AppState;
use booking_dashboard::config::DashboardConfig;
use booking_dashboard::domain::{
    Booking, BookingId, BookingRepository, BookingStatus, Catalog, InMemoryBookingRepository,
    NotificationEvent, NotificationKind, NotificationStore, UserId,
};
use booking_dashboard::service::{BookingCreationWorkflow, DashboardService, SimulatedSubmitter};

fn booking(id: u128, status: BookingStatus, offset: Duration) -> Booking {
    let start = Utc::now() + offset;
    Booking {
        id: BookingId::from_uuid(uuid::Uuid::from_u128(id)),
        user_id: UserId::from_uuid(uuid::Uuid::from_u128(1)),
        provider_id: "provider1".to_string(),
        service_type: "Medical Consultation".to_string(),
        start_time: start,
        end_time: start + Duration::hours(1),
        status,
        notes: None,
        created_at: start - Duration::days(1),
        updated_at: start - Duration::days(1),
        provider: None,
    }
}

fn unread(title: &str, age: Duration) -> NotificationEvent {
    NotificationEvent::new(
        NotificationKind::BookingCreated,
        title,
        "Your appointment has been confirmed",
        Utc::now() - age,
    )
}

/// Router over bookings 1 (pending, +1h), 2 (completed, -1h),
/// 3 (cancelled, +2h) and two unread notifications.
fn fixture_app() -> (Router, Vec<NotificationEvent>) {
    let repository: Arc<dyn BookingRepository> =
        Arc::new(InMemoryBookingRepository::with_bookings(vec![
            booking(1, BookingStatus::Pending, Duration::hours(1)),
            booking(2, BookingStatus::Completed, Duration::hours(-1)),
            booking(3, BookingStatus::Cancelled, Duration::hours(2)),
        ]));
    let notifications = vec![
        unread("Booking Confirmed", Duration::minutes(5)),
        unread("New Booking Request", Duration::minutes(90)),
    ];
    let workflow = BookingCreationWorkflow::new(Arc::new(SimulatedSubmitter::new(
        StdDuration::from_millis(10),
    )));
    let service = DashboardService::new(
        repository,
        Arc::new(NotificationStore::with_events(notifications.clone())),
        Arc::new(workflow),
        Catalog::standard(),
    );
    (build_app(AppState::new(service)), notifications)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    };
    let Ok(request) = request else {
        panic!("invalid request");
    };
    let Ok(response) = app.clone().oneshot(request).await else {
        panic!("router failed");
    };
    let status = response.status();
    let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
        panic!("body read failed");
    };
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|b| b["id"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

fn uuid_str(n: u128) -> String {
    uuid::Uuid::from_u128(n).to_string()
}

#[tokio::test]
async fn dashboard_snapshot_groups_and_counts() {
    let (app, _) = fixture_app();
    let (status, body) = send(&app, Method::GET, "/api/v1/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["upcoming"]), vec![uuid_str(1)]);
    assert_eq!(ids(&body["past"]), vec![uuid_str(2)]);
    assert_eq!(
        body["stats"],
        json!({"total": 3, "pending": 1, "confirmed": 0, "completed": 1, "cancelled": 1})
    );
}

#[tokio::test]
async fn list_bookings_by_view() {
    let (app, _) = fixture_app();

    let (_, all) = send(&app, Method::GET, "/api/v1/bookings", None).await;
    assert_eq!(all["total"], 3);
    assert_eq!(all["view"], "all");

    let (_, upcoming) = send(&app, Method::GET, "/api/v1/bookings?view=upcoming", None).await;
    assert_eq!(ids(&upcoming["data"]), vec![uuid_str(1)]);

    let (_, past) = send(&app, Method::GET, "/api/v1/bookings?view=past", None).await;
    assert_eq!(ids(&past["data"]), vec![uuid_str(2)]);

    let (status, _) = send(&app, Method::GET, "/api/v1/bookings?view=someday", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_and_cancel_booking() {
    let (app, _) = fixture_app();
    let uri = format!("/api/v1/bookings/{}", uuid_str(1));
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "pending");

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("{uri}/status"),
        Some(json!({"status": "cancelled"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "cancelled");

    let (_, stats) = send(&app, Method::GET, "/api/v1/stats", None).await;
    assert_eq!(stats["pending"], 0);
    assert_eq!(stats["cancelled"], 2);
}

#[tokio::test]
async fn unknown_booking_is_404_with_error_body() {
    let (app, _) = fixture_app();
    let uri = format!("/api/v1/bookings/{}", uuid::Uuid::new_v4());
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], 2001);
}

#[tokio::test]
async fn create_booking_rejects_malformed_date() {
    let (app, _) = fixture_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/bookings",
        Some(json!({
            "providerId": "provider1",
            "serviceType": "Medical Consultation",
            "date": "someday",
            "startTime": "25:99",
            "endTime": "noon"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 1002);

    let (_, workflow) = send(&app, Method::GET, "/api/v1/bookings/workflow", None).await;
    assert_eq!(workflow["state"], "idle");
    assert_eq!(workflow["draft"]["date"], "someday");
}

#[tokio::test]
async fn create_booking_validates_and_accepts() {
    let (app, _) = fixture_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/bookings",
        Some(json!({
            "providerId": "",
            "serviceType": "Therapy Session",
            "date": "2026-11-20",
            "startTime": "16:00",
            "endTime": "17:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], 1001);
    assert_eq!(body["error"]["details"], "providerId");

    let (_, workflow) = send(&app, Method::GET, "/api/v1/bookings/workflow", None).await;
    assert_eq!(workflow["state"], "idle");
    assert_eq!(workflow["draft"]["serviceType"], "Therapy Session");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/bookings",
        Some(json!({
            "providerId": "provider3",
            "serviceType": "Therapy Session",
            "date": "2026-11-20",
            "startTime": "16:00",
            "endTime": "17:00",
            "notes": "Weekly session"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["closeDialog"], true);

    let (_, workflow) = send(&app, Method::GET, "/api/v1/bookings/workflow", None).await;
    assert_eq!(workflow["draft"]["providerId"], "");

    // Simulated submissions leave the store alone.
    let (_, stats) = send(&app, Method::GET, "/api/v1/stats", None).await;
    assert_eq!(stats["total"], 3);
}

#[tokio::test]
async fn notification_read_state_and_dismissal() {
    let (app, events) = fixture_app();
    let (Some(first), Some(second)) = (events.first(), events.get(1)) else {
        panic!("fixture has two notifications");
    };

    let (_, list) = send(&app, Method::GET, "/api/v1/notifications", None).await;
    assert_eq!(list["unreadCount"], 2);
    assert_eq!(list["badge"], "2");
    assert_eq!(list["data"][0]["relativeTime"], "5m ago");
    assert_eq!(list["data"][1]["relativeTime"], "1h ago");
    assert_eq!(list["data"][0]["type"], "booking.created");

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/v1/notifications/{}/read", first.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, list) = send(&app, Method::GET, "/api/v1/notifications", None).await;
    assert_eq!(list["unreadCount"], 1);

    // Unknown ids are ignored.
    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/notifications/{}", uuid::Uuid::new_v4()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, list) = send(&app, Method::GET, "/api/v1/notifications", None).await;
    assert_eq!(list["data"].as_array().map(Vec::len), Some(2));

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/v1/notifications/{}", second.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::POST, "/api/v1/notifications/read-all", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, list) = send(&app, Method::GET, "/api/v1/notifications", None).await;
    assert_eq!(list["unreadCount"], 0);
    assert!(list.get("badge").is_none());
    assert_eq!(list["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn catalog_endpoints() {
    let (app, _) = fixture_app();
    let (_, providers) = send(&app, Method::GET, "/api/v1/catalog/providers", None).await;
    assert_eq!(providers.as_array().map(Vec::len), Some(4));
    assert_eq!(providers[1]["name"], "Dr. Michael Chen");

    let (_, services) = send(&app, Method::GET, "/api/v1/catalog/service-types", None).await;
    assert_eq!(services.as_array().map(Vec::len), Some(6));
}

#[tokio::test]
async fn live_server_serves_seeded_dashboard() {
    let config = DashboardConfig {
        submit_latency: StdDuration::from_millis(10),
        ..DashboardConfig::default()
    };
    let app = build_app(AppState::new(DashboardService::from_config(&config)));

    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind failed");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("no local addr");
    };
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let client = reqwest::Client::new();
    let Ok(health) = client.get(format!("http://{addr}/health")).send().await else {
        panic!("health request failed");
    };
    assert_eq!(health.status(), reqwest::StatusCode::OK);
    let Ok(health) = health.json::<Value>().await else {
        panic!("health body");
    };
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["workflow"], "idle");

    let Ok(dashboard) = client
        .get(format!("http://{addr}/api/v1/dashboard"))
        .send()
        .await
    else {
        panic!("dashboard request failed");
    };
    let Ok(dashboard) = dashboard.json::<Value>().await else {
        panic!("dashboard body");
    };
    assert_eq!(dashboard["stats"]["total"], 3);
    assert_eq!(dashboard["upcoming"].as_array().map(Vec::len), Some(2));
    assert_eq!(dashboard["past"].as_array().map(Vec::len), Some(1));
}
