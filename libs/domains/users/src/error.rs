use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Database error: {0}")]
    Storage(String),

    #[error("{0}")]
    Validation(String),

    #[error("User not found: {0}")]
    NotFound(i64),

    #[error("No users found")]
    NoUsersFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<DatabaseError> for UserError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Sqlite(e) => UserError::Storage(e.to_string()),
            other => UserError::Storage(other.to_string()),
        }
    }
}

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        DatabaseError::from(err).into()
    }
}

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Storage(_) => AppError::Database(err.to_string()),
            UserError::Validation(msg) => AppError::Validation(msg),
            UserError::NotFound(_) => AppError::NotFound("User not found".to_string()),
            UserError::NoUsersFound => AppError::NotFound(err.to_string()),
            UserError::InvalidCredentials => AppError::Unauthorized(err.to_string()),
            UserError::PasswordHash(msg) => {
                AppError::InternalServerError(format!("Unexpected error: {}", msg))
            }
            UserError::Unexpected(_) => AppError::InternalServerError(err.to_string()),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
