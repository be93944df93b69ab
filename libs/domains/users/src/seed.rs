//! Fixture users for a fresh database.

use crate::error::UserResult;
use crate::models::CreateUser;
use crate::repository::UserRepository;
use crate::service::UserService;

/// (name, email, password) of the fixture users, in insertion order
pub const DEFAULT_USERS: [(&str, &str, &str); 3] = [
    ("John Doe", "john@example.com", "password123"),
    ("Jane Smith", "jane@example.com", "secret456"),
    ("Bob Johnson", "bob@example.com", "qwerty789"),
];

/// Insert [`DEFAULT_USERS`] when the store holds no users.
///
/// Returns the number of users inserted; zero when the store was not empty.
pub async fn seed_default_users<R: UserRepository>(service: &UserService<R>) -> UserResult<usize> {
    if !service.list_users().await?.is_empty() {
        tracing::info!("Users table already populated, skipping seed");
        return Ok(0);
    }

    for (name, email, password) in DEFAULT_USERS {
        let id = service
            .create_user(CreateUser {
                name: Some(name.to_string()),
                email: Some(email.to_string()),
                password: Some(password.to_string()),
            })
            .await?;
        tracing::debug!(user_id = id, email, "Seeded user");
    }

    Ok(DEFAULT_USERS.len())
}
