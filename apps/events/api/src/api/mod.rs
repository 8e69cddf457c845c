use axum::Router;
use domain_events::{entity, handlers};

pub mod health;

/// Creates the API routes.
///
/// Every sub-router has its state applied, so the result is stateless and
/// can be handed to `create_router`.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest(entity::Model::URL, handlers::router(state.events.clone()))
}

/// Creates a router with the /ready endpoint that checks the database.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
