use domain_events::entity;
use utoipa::OpenApi;

/// Events service API documentation, served at `/api-docs/openapi.json`
#[derive(OpenApi)]
#[openapi(
    paths(
        axum_helpers::server::health::health_handler,
        crate::api::health::ready_handler,
    ),
    components(schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse)),
    info(
        title = "Events API",
        version = "0.1.0",
        description = "Create, fetch and list scheduled events"
    ),
    nest(
        (path = entity::Model::URL, api = domain_events::ApiDoc)
    ),
    tags(
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
