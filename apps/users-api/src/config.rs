use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

// Import database config from the database library
use database::sqlite::SqliteConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: SqliteConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = SqliteConfig::from_env()?; // Defaults to sqlite://users.db?mode=rwc
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=5009

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars(
            [
                ("APP_ENV", None::<&str>),
                ("HOST", None),
                ("PORT", None),
                ("DATABASE_URL", None),
                ("DB_CONNECT_TIMEOUT_SECS", None),
                ("DB_SQLX_LOGGING", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "users_api");
                assert_eq!(config.server.address().to_string(), "0.0.0.0:5009");
                assert_eq!(config.database.url, "sqlite://users.db?mode=rwc");
                assert!(config.environment.is_development());
            },
        );
    }

    #[test]
    fn test_config_rejects_bad_port() {
        temp_env::with_var("PORT", Some("http"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
