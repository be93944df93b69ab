use sea_orm::{Database, DatabaseConnection};
use tracing::{debug, warn};

use super::SqliteConfig;
use crate::common::{DatabaseError, DatabaseResult};

/// Close a connection, logging instead of failing when the driver reports an error.
///
/// Used at the end of a unit of work where the result has already been
/// computed and a close failure must not mask it.
pub async fn close(db: DatabaseConnection) {
    if let Err(e) = db.close().await {
        warn!(error = %e, "Failed to close SQLite connection");
    }
}

/// Opens short-lived SQLite connections from a shared [`SqliteConfig`].
///
/// The connector itself holds no connection, so cloning it into every
/// request handler is cheap and never shares a handle between requests.
#[derive(Clone, Debug)]
pub struct SqliteConnector {
    config: SqliteConfig,
}

impl SqliteConnector {
    pub fn new(config: SqliteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SqliteConfig {
        &self.config
    }

    /// Open a fresh connection. The caller owns it and should [`close`] it.
    ///
    /// # Errors
    /// [`DatabaseError::ConnectionFailed`] when the file cannot be opened
    /// (missing directory, permissions, connect timeout).
    pub async fn open(&self) -> DatabaseResult<DatabaseConnection> {
        let db = Database::connect(self.config.connect_options())
            .await
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
        debug!(url = %self.config.url, "Opened SQLite connection");
        Ok(db)
    }
}
