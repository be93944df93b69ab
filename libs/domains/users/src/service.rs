use std::sync::Arc;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, LoginRequest, NewUser, UpdateUser, UserResponse};
use crate::password::{hash_password, verify_password};
use crate::repository::UserRepository;

const MISSING_DATA: &str = "Missing data";
const MISSING_SEARCH_NAME: &str = "Please provide a name to search";
const MISSING_CREDENTIALS: &str = "Email and password are required";

/// Service layer for User business logic
///
/// Inputs are validated before any hashing or storage access, so a rejected
/// request never mutates the store.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all users in id order
    pub async fn list_users(&self) -> UserResult<Vec<UserResponse>> {
        let users = self.repository.list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: i64) -> UserResult<UserResponse> {
        let user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        Ok(user.into())
    }

    /// Create a new user with password hashing, returning the new id
    pub async fn create_user(&self, input: CreateUser) -> UserResult<i64> {
        input.validate().map_err(|_| missing_data())?;
        let (Some(name), Some(email), Some(password)) = (input.name, input.email, input.password)
        else {
            return Err(missing_data());
        };

        let user = new_user(name, email, &password)?;
        self.repository.create(user).await
    }

    /// Overwrite a user's name, email and password
    pub async fn update_user(&self, id: i64, input: UpdateUser) -> UserResult<()> {
        input.validate().map_err(|_| missing_data())?;
        let (Some(name), Some(email), Some(password)) = (input.name, input.email, input.password)
        else {
            return Err(missing_data());
        };

        let user = new_user(name, email, &password)?;
        if !self.repository.update(id, user).await? {
            return Err(UserError::NotFound(id));
        }

        Ok(())
    }

    /// Delete a user
    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        if !self.repository.delete(id).await? {
            return Err(UserError::NotFound(id));
        }

        tracing::info!(user_id = id, "User {} deleted", id);
        Ok(())
    }

    /// Users whose name contains `name`
    pub async fn search_users(&self, name: Option<&str>) -> UserResult<Vec<UserResponse>> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| UserError::Validation(MISSING_SEARCH_NAME.to_string()))?;

        let users = self.repository.search_by_name(name).await?;
        if users.is_empty() {
            return Err(UserError::NoUsersFound);
        }

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Verify user credentials, returning the matching user's id
    ///
    /// An unknown email and a wrong password fail identically.
    pub async fn login(&self, input: LoginRequest) -> UserResult<i64> {
        input
            .validate()
            .map_err(|_| UserError::Validation(MISSING_CREDENTIALS.to_string()))?;
        let (Some(email), Some(password)) = (input.email, input.password) else {
            return Err(UserError::Validation(MISSING_CREDENTIALS.to_string()));
        };

        let user = self
            .repository
            .get_by_email(&email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !verify_password(&password, &user.password_hash) {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user.id)
    }
}

fn missing_data() -> UserError {
    UserError::Validation(MISSING_DATA.to_string())
}

fn new_user(name: String, email: String, password: &str) -> UserResult<NewUser> {
    Ok(NewUser {
        name,
        email,
        password_hash: hash_password(password)?,
    })
}
