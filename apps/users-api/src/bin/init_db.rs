//! Creates the users table and seeds fixture users into an empty database.
//!
//! Reads `DATABASE_URL` like the server does.

use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use database::sqlite::{SqliteConfig, SqliteConnector, close, ensure_schema};
use domain_users::{SqliteUserRepository, UserService, seed_default_users};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();
    init_tracing(&Environment::from_env());

    let connector = SqliteConnector::new(SqliteConfig::from_env()?);

    let db = connector
        .open()
        .await
        .map_err(|e| eyre::eyre!("Failed to open SQLite database: {}", e))?;
    let schema = ensure_schema(&db).await;
    close(db).await;
    schema.map_err(|e| eyre::eyre!("Failed to create users table: {}", e))?;

    let service = UserService::new(SqliteUserRepository::new(connector.clone()));
    let inserted = seed_default_users(&service).await?;

    info!(
        inserted,
        url = connector.config().url(),
        "Database initialized with sample data"
    );
    Ok(())
}
