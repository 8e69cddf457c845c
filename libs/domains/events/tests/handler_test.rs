//! Handler tests for Events domain
//!
//! These drive the events router with in-memory or hand-rolled repositories:
//! - Request decoding and validation messages
//! - Response envelopes and status codes
//! - Per-request deadline

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_events::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::time::Duration;
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app_with<R: EventRepository + 'static>(repo: R) -> Router {
    Router::new().nest(
        entity::Model::URL,
        handlers::router(EventService::new(repo)),
    )
}

fn app() -> Router {
    app_with(InMemoryEventRepository::new())
}

fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/events")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn standup() -> Value {
    json!({
        "title": "Standup",
        "description": "Daily sync",
        "start_time": "2024-01-15T10:00:00Z",
        "end_time": "2024-01-15T10:15:00Z"
    })
}

#[tokio::test]
async fn test_create_event_returns_201() {
    let response = app()
        .oneshot(post_json(standup().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    let event = &body["event"];
    assert_eq!(event["title"], "Standup");
    assert_eq!(event["description"], "Daily sync");
    assert_eq!(event["start_time"], "2024-01-15T10:00:00Z");
    assert!(Uuid::parse_str(event["id"].as_str().unwrap()).is_ok());
    assert!(event["created_at"].is_string());
}

#[tokio::test]
async fn test_create_event_without_description_omits_field() {
    let mut input = standup();
    input.as_object_mut().unwrap().remove("description");

    let response = app().oneshot(post_json(input.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert!(body["event"].get("description").is_none());
}

#[tokio::test]
async fn test_create_event_empty_title_returns_400() {
    let mut input = standup();
    input["title"] = json!("");

    let response = app().oneshot(post_json(input.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "title is required" }));
}

#[tokio::test]
async fn test_create_event_validation_messages() {
    let cases = [
        (json!({ "title": "x".repeat(101) }), "title must be 100 characters or less"),
        (json!({ "start_time": null }), "start_time is required"),
        (json!({ "end_time": null }), "end_time is required"),
        (
            json!({ "end_time": "2024-01-15T09:00:00Z" }),
            "start_time must be before end_time",
        ),
    ];

    for (patch, expected) in cases {
        let mut input = standup();
        for (key, value) in patch.as_object().unwrap() {
            input[key] = value.clone();
        }

        let response = app().oneshot(post_json(input.to_string())).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", expected);

        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body["error"], expected);
    }
}

#[tokio::test]
async fn test_create_event_malformed_json_returns_400() {
    for raw in ["{not json", "", r#"{"title": 5}"#, r#"{"title": "a", "start_time": "yesterday"}"#] {
        let response = app().oneshot(post_json(raw)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", raw);
        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body["error"], "Invalid request body");
    }
}

#[tokio::test]
async fn test_create_event_null_body_fails_validation() {
    let response = app().oneshot(post_json("null")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "title is required" }));
}

#[tokio::test]
async fn test_create_event_nanosecond_times_read_back_unchanged() {
    let app = app();
    let mut input = standup();
    input["start_time"] = json!("2024-01-15T10:00:00.123456789Z");

    let response = app
        .clone()
        .oneshot(post_json(input.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: EventResponse = json_body(response.into_body()).await;
    assert_eq!(created.event.start_time.timestamp_subsec_nanos(), 123_456_000);

    let response = app
        .oneshot(get(&format!("/events/{}", created.event.id)))
        .await
        .unwrap();
    let fetched: EventResponse = json_body(response.into_body()).await;
    assert_eq!(fetched.event, created.event);
}

#[tokio::test]
async fn test_create_then_get_roundtrip() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json(standup().to_string()))
        .await
        .unwrap();
    let created: EventResponse = json_body(response.into_body()).await;

    let response = app
        .oneshot(get(&format!("/events/{}", created.event.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let fetched: EventResponse = json_body(response.into_body()).await;
    assert_eq!(fetched.event, created.event);
}

#[tokio::test]
async fn test_get_event_invalid_id_returns_400() {
    let response = app().oneshot(get("/events/not-a-uuid")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Invalid event ID" }));
}

#[tokio::test]
async fn test_get_event_unknown_id_returns_404() {
    let response = app()
        .oneshot(get(&format!("/events/{}", Uuid::new_v4())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "error": "Event not found" }));
}

#[tokio::test]
async fn test_list_events_empty() {
    let response = app().oneshot(get("/events")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "events": [], "count": 0 }));
}

#[tokio::test]
async fn test_list_events_sorted_by_start_time() {
    let app = app();

    for (title, start, end) in [
        ("late", "2024-01-15T15:00:00Z", "2024-01-15T16:00:00Z"),
        ("early", "2024-01-15T08:00:00Z", "2024-01-15T09:00:00Z"),
        ("middle", "2024-01-15T12:00:00+01:00", "2024-01-15T13:00:00+01:00"),
    ] {
        let input = json!({ "title": title, "start_time": start, "end_time": end });
        let response = app.clone().oneshot(post_json(input.to_string())).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get("/events")).await.unwrap();
    let body: EventsResponse = json_body(response.into_body()).await;

    assert_eq!(body.count, 3);
    let titles: Vec<_> = body.events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["early", "middle", "late"]);
}

/// Repository whose every call fails
struct BrokenRepository;

#[async_trait]
impl EventRepository for BrokenRepository {
    async fn create_event(&self, _event: Event) -> EventResult<()> {
        Err(EventError::storage("create event", "connection refused"))
    }

    async fn get_event_by_id(&self, _id: Uuid) -> EventResult<Event> {
        Err(EventError::storage("get event", "connection refused"))
    }

    async fn get_all_events(&self) -> EventResult<Vec<Event>> {
        Err(EventError::storage("list events", "connection refused"))
    }

    async fn close(&self) -> EventResult<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_storage_failures_map_per_endpoint() {
    let app = app_with(BrokenRepository);

    let response = app
        .clone()
        .oneshot(post_json(standup().to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "failed to create event");

    let response = app
        .clone()
        .oneshot(get(&format!("/events/{}", Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Event not found");

    let response = app.oneshot(get("/events")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Failed to retrieve events");
}

/// Repository that never answers
struct HangingRepository;

#[async_trait]
impl EventRepository for HangingRepository {
    async fn create_event(&self, _event: Event) -> EventResult<()> {
        std::future::pending().await
    }

    async fn get_event_by_id(&self, _id: Uuid) -> EventResult<Event> {
        std::future::pending().await
    }

    async fn get_all_events(&self) -> EventResult<Vec<Event>> {
        std::future::pending().await
    }

    async fn close(&self) -> EventResult<()> {
        Ok(())
    }
}

#[tokio::test(start_paused = true)]
async fn test_deadline_expiry_is_reported_as_failure() {
    let app = Router::new().nest(
        entity::Model::URL,
        handlers::router_with_timeout(EventService::new(HangingRepository), Duration::from_secs(30)),
    );

    let response = app.clone().oneshot(get("/events")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = app
        .clone()
        .oneshot(post_json(standup().to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "failed to create event");

    let response = app
        .oneshot(get(&format!("/events/{}", Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
