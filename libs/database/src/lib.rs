//! Connection management for the PostgreSQL store behind the events service
//!
//! # Features
//!
//! - `postgres` (default) - pooled PostgreSQL connections through SeaORM
//! - `config` - load [`postgres::PostgresConfig`] with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use core_config::FromEnv;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! postgres::check_health(&db).await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
