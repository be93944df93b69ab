use async_trait::async_trait;
use database::sqlite::{SqliteConnector, close};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, FromQueryResult, Statement};

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User};
use crate::repository::UserRepository;

const SELECT_USERS: &str = "SELECT id, name, email, password FROM users";

/// Row shape of the `users` table
#[derive(Debug, FromQueryResult)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            password_hash: row.password,
        }
    }
}

/// SQLite implementation of UserRepository
///
/// Every call opens its own connection and closes it before returning.
#[derive(Clone, Debug)]
pub struct SqliteUserRepository {
    connector: SqliteConnector,
}

impl SqliteUserRepository {
    pub fn new(connector: SqliteConnector) -> Self {
        Self { connector }
    }

    async fn open(&self) -> UserResult<DatabaseConnection> {
        self.connector.open().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to open SQLite connection");
            UserError::from(e)
        })
    }

    async fn fetch_all(&self, stmt: Statement) -> UserResult<Vec<User>> {
        let db = self.open().await?;
        let rows = UserRow::find_by_statement(stmt).all(&db).await;
        close(db).await;

        Ok(rows.map_err(log_db_err)?.into_iter().map(User::from).collect())
    }

    async fn fetch_one(&self, stmt: Statement) -> UserResult<Option<User>> {
        let db = self.open().await?;
        let row = UserRow::find_by_statement(stmt).one(&db).await;
        close(db).await;

        Ok(row.map_err(log_db_err)?.map(User::from))
    }

    /// Run a write and return the number of affected rows
    async fn execute(&self, stmt: Statement) -> UserResult<u64> {
        let db = self.open().await?;
        let result = db.execute_raw(stmt).await;
        close(db).await;

        Ok(result.map_err(log_db_err)?.rows_affected())
    }
}

fn log_db_err(e: DbErr) -> UserError {
    tracing::error!(error = %e, "SQLite query failed");
    e.into()
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let sql = format!("{SELECT_USERS} ORDER BY id");
        self.fetch_all(Statement::from_string(DbBackend::Sqlite, sql))
            .await
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let sql = format!("{SELECT_USERS} WHERE id = ?");
        self.fetch_one(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            sql,
            [id.into()],
        ))
        .await
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let sql = format!("{SELECT_USERS} WHERE email = ? ORDER BY id LIMIT 1");
        self.fetch_one(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            sql,
            [email.into()],
        ))
        .await
    }

    async fn create(&self, user: NewUser) -> UserResult<i64> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "INSERT INTO users (name, email, password) VALUES (?, ?, ?)",
            [
                user.name.into(),
                user.email.into(),
                user.password_hash.into(),
            ],
        );

        let db = self.open().await?;
        let result = db.execute_raw(stmt).await;
        close(db).await;

        let last_insert_id = result.map_err(log_db_err)?.last_insert_id();
        let id = i64::try_from(last_insert_id)
            .map_err(|_| UserError::Unexpected(format!("Invalid row id {}", last_insert_id)))?;

        tracing::info!(user_id = id, "Created user");
        Ok(id)
    }

    async fn update(&self, id: i64, user: NewUser) -> UserResult<bool> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "UPDATE users SET name = ?, email = ?, password = ? WHERE id = ?",
            [
                user.name.into(),
                user.email.into(),
                user.password_hash.into(),
                id.into(),
            ],
        );

        let updated = self.execute(stmt).await? > 0;
        if updated {
            tracing::info!(user_id = id, "Updated user");
        }
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> UserResult<bool> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "DELETE FROM users WHERE id = ?",
            [id.into()],
        );

        Ok(self.execute(stmt).await? > 0)
    }

    async fn search_by_name(&self, name: &str) -> UserResult<Vec<User>> {
        let sql = format!("{SELECT_USERS} WHERE name LIKE ? ORDER BY id");
        let pattern = format!("%{}%", name);
        self.fetch_all(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            sql,
            [pattern.into()],
        ))
        .await
    }
}
