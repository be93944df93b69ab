use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// User entity - matches the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,
    /// User display name
    pub name: String,
    /// User email (not unique)
    pub email: String,
    /// Argon2 password hash (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// User response DTO (without password_hash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Row contents written by create and update. The password is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// DTO for creating a new user
///
/// Fields are optional so that an absent field is a validation error
/// rather than a body rejection.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(required, length(min = 1))]
    #[schema(example = "Ann")]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    #[schema(example = "ann@x.com")]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    #[schema(example = "pw")]
    pub password: Option<String>,
}

/// DTO for updating an existing user. Every field is overwritten.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

/// DTO for user login
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(required, length(min = 1))]
    #[schema(example = "john@example.com")]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    #[schema(example = "password123")]
    pub password: Option<String>,
}

/// Query string for `GET /search`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring to match against user names
    pub name: Option<String>,
}

/// Body of every mutation response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User created successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response after successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "success")]
    pub status: String,
    #[schema(example = 1)]
    pub user_id: i64,
}

impl LoginResponse {
    pub fn success(user_id: i64) -> Self {
        Self {
            status: "success".to_string(),
            user_id,
        }
    }
}
