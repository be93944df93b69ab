//! Users Domain
//!
//! User management over a single `users` table.
//!
//! # Features
//!
//! - User CRUD operations
//! - Name search
//! - Password hashing with Argon2
//! - Login (credential check)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, password hashing, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SQLite and in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity and DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{
//!     handlers,
//!     repository::InMemoryUserRepository,
//!     service::UserService,
//! };
//!
//! // Create repository and service
//! let repository = InMemoryUserRepository::new();
//! let service = UserService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod repository;
pub mod seed;
pub mod service;
pub mod sqlite;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateUser, LoginRequest, LoginResponse, MessageResponse, NewUser, SearchQuery, UpdateUser,
    User, UserResponse,
};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use seed::{DEFAULT_USERS, seed_default_users};
pub use service::UserService;
pub use sqlite::SqliteUserRepository;
