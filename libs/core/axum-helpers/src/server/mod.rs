//! Server infrastructure
//!
//! - Router assembly with the OpenAPI document and shared middleware
//! - Liveness (`/health`) and readiness helpers
//! - Graceful shutdown with a drain deadline and cleanup hook

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router, serve_with_shutdown};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::ShutdownCoordinator;
