/// Unified database error type for all storage operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// SQLite errors surfaced by SeaORM
    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] sea_orm::DbErr),

    /// Could not open a connection to the store
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
