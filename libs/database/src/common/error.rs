/// Error type for connection management and health probing
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Errors surfaced by SeaORM / sqlx
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// Connection could not be established, even after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
