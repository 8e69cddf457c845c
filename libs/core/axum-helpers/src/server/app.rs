use crate::errors::handlers::not_found;
use crate::http::{cors_layer_from_env, security_headers};
use super::shutdown::ShutdownCoordinator;
use axum::{Json, Router, middleware, routing::get};
use core_config::server::ServerConfig;
use std::future::{Future, IntoFuture};
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

async fn openapi_json<T: OpenApi>() -> Json<utoipa::openapi::OpenApi> {
    Json(T::openapi())
}

/// Wraps the API routes with the shared middleware stack.
///
/// - `GET /api-docs/openapi.json` serving `T`'s document
/// - JSON 404 fallback for unknown routes
/// - request tracing, security headers, CORS (see [`cors_layer_from_env`])
///   and response compression
///
/// Routes keep their own paths; nothing is nested under a prefix. Health and
/// readiness routes are merged by the app.
///
/// # Errors
/// Fails when `CORS_ALLOWED_ORIGIN` contains an invalid origin.
///
/// # Example
/// ```ignore
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new().nest("/events", events_router);
/// let router = create_router::<ApiDoc>(api_routes)?;
/// ```
pub fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors_layer = cors_layer_from_env()?;

    let router = Router::new()
        .route("/api-docs/openapi.json", get(openapi_json::<T>))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serve until `coordinator` signals shutdown, then drain.
///
/// In-flight requests get `shutdown_timeout` to finish; connections still
/// open after that are dropped. `cleanup` runs once serving has stopped,
/// whichever way it stopped.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    router: Router,
    coordinator: ShutdownCoordinator,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let graceful = coordinator.clone();
    let server = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { graceful.wait_for_shutdown().await });

    let drain_deadline = async {
        coordinator.wait_for_shutdown().await;
        tokio::time::sleep(shutdown_timeout).await;
    };

    let serve_result = tokio::select! {
        result = server.into_future() => result,
        _ = drain_deadline => {
            warn!(
                "In-flight requests did not finish within {:?}, forcing shutdown",
                shutdown_timeout
            );
            Ok(())
        }
    };

    if let Err(e) = &serve_result {
        tracing::error!("Server encountered an error: {:?}", e);
    }

    info!("Running cleanup tasks");
    cleanup.await;
    info!("Server stopped");

    serve_result
}

/// Bind `server_config.address()` and serve until SIGINT/SIGTERM.
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     service.close().await.ok();
/// };
///
/// create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let coordinator = ShutdownCoordinator::default();
    let signals = coordinator.clone();
    tokio::spawn(async move { signals.wait_for_signal().await });

    serve_with_shutdown(listener, router, coordinator, shutdown_timeout, cleanup).await
}
