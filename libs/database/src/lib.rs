//! Database library providing the SQLite storage accessor for the user service
//!
//! # Features
//!
//! - `sqlite` (default) - SQLite support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::sqlite::{SqliteConfig, SqliteConnector, ensure_schema};
//!
//! let connector = SqliteConnector::new(SqliteConfig::new("sqlite://users.db?mode=rwc"));
//! let db = connector.open().await?;
//! ensure_schema(&db).await?;
//! db.close().await?;
//! ```

pub mod common;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use common::{DatabaseError, DatabaseResult};
