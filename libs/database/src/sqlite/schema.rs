use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::info;

use crate::common::DatabaseResult;

/// DDL for the single `users` table.
pub const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        password TEXT NOT NULL
    )
"#;

/// Create the `users` table if it does not exist yet.
///
/// Idempotent; this is table bootstrap, not a migration system.
pub async fn ensure_schema(db: &DatabaseConnection) -> DatabaseResult<()> {
    db.execute_unprepared(CREATE_USERS_TABLE).await?;
    info!("Ensured users table exists");
    Ok(())
}
