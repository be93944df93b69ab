use sea_orm::ConnectOptions;
use std::time::Duration;

#[cfg(feature = "config")]
use core_config::{env_or_default, env_parse_or, ConfigError, FromEnv};

/// Database file used when `DATABASE_URL` is not set. `mode=rwc` creates it on first open.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";

/// SQLite connection configuration
///
/// Each connection opened from this config is a single-connection handle,
/// so `connect_options` caps the underlying pool at one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SqliteConfig {
    /// Connection URL, e.g. `sqlite://users.db?mode=rwc`
    pub url: String,

    /// Connect/acquire timeout in seconds
    pub connect_timeout_secs: u64,

    /// Enable SQL statement logging
    pub sqlx_logging: bool,
}

impl SqliteConfig {
    /// Create a config for `url` with default timeouts
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Config for an on-disk database file, created if missing
    pub fn for_file(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(format!("sqlite://{}?mode=rwc", path.as_ref().display()))
    }

    /// Convert this config into SeaORM ConnectOptions
    pub fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url.clone());
        opt.max_connections(1)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.connect_timeout_secs))
            .sqlx_logging(self.sqlx_logging);
        opt
    }

    /// Get a reference to the database URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            connect_timeout_secs: 8,
            sqlx_logging: false,
        }
    }
}

/// Load SqliteConfig from environment variables
///
/// - `DATABASE_URL` (optional, default: `sqlite://users.db?mode=rwc`)
/// - `DB_CONNECT_TIMEOUT_SECS` (optional, default: 8)
/// - `DB_SQLX_LOGGING` (optional, default: false)
#[cfg(feature = "config")]
impl FromEnv for SqliteConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_or_default("DATABASE_URL", DEFAULT_DATABASE_URL),
            connect_timeout_secs: env_parse_or("DB_CONNECT_TIMEOUT_SECS", "8")?,
            sqlx_logging: env_parse_or("DB_SQLX_LOGGING", "false")?,
        })
    }
}
