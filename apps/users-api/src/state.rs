//! Application state management.
//!
//! The state holds configuration and the SQLite connector. The connector
//! opens a connection per unit of work, so cloning the state never shares a
//! database handle between requests.

use database::sqlite::SqliteConnector;

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub connector: SqliteConnector,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let connector = SqliteConnector::new(config.database.clone());
        Self { config, connector }
    }
}
