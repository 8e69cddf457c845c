use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::entity;
use crate::error::{EventError, EventResult};
use crate::models::{CreateEvent, Event, EventResponse, EventsResponse};
use crate::repository::EventRepository;
use crate::service::EventService;

/// Deadline applied to every service call made by a handler
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// OpenAPI documentation for Events API
#[derive(OpenApi)]
#[openapi(
    paths(list_events, create_event, get_event),
    components(
        schemas(Event, CreateEvent, EventResponse, EventsResponse),
        responses(BadRequestResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = entity::Model::TAG, description = "Event scheduling endpoints")
    )
)]
pub struct ApiDoc;

struct HandlerState<R: EventRepository> {
    service: EventService<R>,
    deadline: Duration,
}

impl<R: EventRepository> HandlerState<R> {
    /// Run `call`, giving up with a storage error once the deadline passes.
    /// Dropping the timed-out future cancels the in-flight query.
    async fn within_deadline<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = EventResult<T>>,
    ) -> EventResult<T> {
        match tokio::time::timeout(self.deadline, call).await {
            Ok(result) => result,
            Err(_) => Err(EventError::storage(
                operation,
                format!("deadline of {:?} exceeded", self.deadline),
            )),
        }
    }
}

/// Create the event router with all HTTP endpoints
pub fn router<R: EventRepository + 'static>(service: EventService<R>) -> Router {
    router_with_timeout(service, REQUEST_TIMEOUT)
}

/// Same as [`router`] with a custom per-request deadline
pub fn router_with_timeout<R: EventRepository + 'static>(
    service: EventService<R>,
    deadline: Duration,
) -> Router {
    let state = Arc::new(HandlerState { service, deadline });

    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/{id}", get(get_event))
        .with_state(state)
}

/// List all events, earliest start first
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All events", body = EventsResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_events<R: EventRepository>(
    State(state): State<Arc<HandlerState<R>>>,
) -> Result<Json<EventsResponse>, AppError> {
    let events = state
        .within_deadline("list events", state.service.list_events())
        .await
        .map_err(|_| AppError::InternalServerError("Failed to retrieve events".to_string()))?;

    Ok(Json(EventsResponse::from(events)))
}

/// Create a new event
///
/// Any body that is not a JSON object of the expected shape is rejected with
/// `Invalid request body`; the Content-Type header is not inspected. A bare
/// `null` body is an empty request and fails validation instead.
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateEvent,
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 400, response = BadRequestResponse)
    )
)]
async fn create_event<R: EventRepository>(
    State(state): State<Arc<HandlerState<R>>>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let input = serde_json::from_slice::<Option<CreateEvent>>(&body).map_err(|e| {
        tracing::debug!(error = %EventError::Decode(e.to_string()), "Rejected request body");
        AppError::BadRequest("Invalid request body".to_string())
    })?
    .unwrap_or_default();

    let event = state
        .within_deadline("create event", state.service.create_event(input))
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(EventResponse { event })))
}

/// Get an event by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_event<R: EventRepository>(
    State(state): State<Arc<HandlerState<R>>>,
    Path(raw_id): Path<String>,
) -> Result<Json<EventResponse>, AppError> {
    let id = Uuid::parse_str(&raw_id).map_err(|_| {
        tracing::debug!(error = %EventError::InvalidId(raw_id.clone()), "Rejected event id");
        AppError::BadRequest("Invalid event ID".to_string())
    })?;

    let event = state
        .within_deadline("get event", state.service.get_event(id))
        .await
        .map_err(|_| AppError::NotFound("Event not found".to_string()))?;

    Ok(Json(EventResponse { event }))
}
