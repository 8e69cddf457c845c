use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// CORS for an explicit list of origins
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Build the CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// A comma-separated list restricts origins to that list. When the variable
/// is unset or blank any origin is allowed.
pub fn cors_layer_from_env() -> io::Result<CorsLayer> {
    let origins_str = std::env::var("CORS_ALLOWED_ORIGIN").unwrap_or_default();

    let allowed_origins = origins_str
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if allowed_origins.is_empty() {
        info!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
        return Ok(CorsLayer::permissive());
    }

    info!("CORS configured with allowed origins: {}", origins_str);
    Ok(create_cors_layer(allowed_origins))
}
