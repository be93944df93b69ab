//! SQLite storage accessor
//!
//! Every unit of work opens its own connection through [`SqliteConnector`]
//! and closes it when done; nothing here keeps a long-lived pool.

mod config;
mod connector;
mod health;
mod schema;

pub use config::{SqliteConfig, DEFAULT_DATABASE_URL};
pub use connector::{close, SqliteConnector};
pub use health::check_health;
pub use schema::{ensure_schema, CREATE_USERS_TABLE};

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbBackend, DbErr, Statement};
