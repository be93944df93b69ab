//! SQLite test infrastructure
//!
//! Provides a `TestDatabase` helper backed by a database file in a temporary
//! directory, with the `users` table already created.

use database::sqlite::{SqliteConfig, SqliteConnector, close, ensure_schema};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test database wrapper that ensures proper cleanup
///
/// The temporary directory (and the database file in it) is removed when
/// this struct is dropped.
pub struct TestDatabase {
    #[allow(dead_code)]
    dir: TempDir,
    path: PathBuf,
    connector: SqliteConnector,
}

impl TestDatabase {
    /// Create a new test database with the schema applied
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connector() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("users.db");
        let connector = SqliteConnector::new(SqliteConfig::for_file(&path));

        let db = connector
            .open()
            .await
            .expect("Failed to open test database");
        ensure_schema(&db)
            .await
            .expect("Failed to create users table");
        close(db).await;

        tracing::info!(path = %path.display(), "Test database ready (SQLite)");

        Self {
            dir,
            path,
            connector,
        }
    }

    /// Connector for the test database; clone it into repositories
    pub fn connector(&self) -> SqliteConnector {
        self.connector.clone()
    }

    /// Path of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a connection for direct assertions. Close it with [`database::sqlite::close`].
    pub async fn connection(&self) -> DatabaseConnection {
        self.connector
            .open()
            .await
            .expect("Failed to open test database")
    }

    /// Count rows in the `users` table
    pub async fn count_users(&self) -> i64 {
        let db = self.connection().await;
        let row = db
            .query_one_raw(Statement::from_string(
                DbBackend::Sqlite,
                "SELECT COUNT(*) AS count FROM users".to_owned(),
            ))
            .await
            .expect("Failed to count users")
            .expect("COUNT(*) returned no row");
        let count: i64 = row.try_get("", "count").expect("Failed to read count");
        close(db).await;
        count
    }
}
