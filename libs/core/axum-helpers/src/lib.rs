//! # Axum Helpers
//!
//! Shared HTTP plumbing for the services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: router assembly, health/readiness, graceful shutdown
//! - **[`http`]**: CORS and security header middleware
//! - **[`errors`]**: `{"error": "..."}` error responses
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//!
//! let router = create_router::<ApiDoc>(api_routes)?.merge(health_router());
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, serve_with_shutdown,
};

pub use http::{cors_layer_from_env, security_headers};

pub use errors::{AppError, ErrorResponse};
