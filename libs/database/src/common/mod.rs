//! Utilities shared by the database connectors

pub mod error;
pub mod retry;

pub use error::{DatabaseError, DatabaseResult};
pub use retry::{retry_with_backoff, RetryConfig};
