use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use axum_helpers::{
    IdPath, JsonBody, QueryParams,
    errors::responses::{
        BadRequestPathResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, UnauthorizedResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{
    CreateUser, LoginRequest, LoginResponse, MessageResponse, SearchQuery, UpdateUser,
    UserResponse,
};
use crate::repository::UserRepository;
use crate::service::UserService;

const TAG: &str = "users";

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(
        home,
        list_users,
        get_user,
        create_user,
        update_user,
        delete_user,
        search_users,
        login,
    ),
    components(
        schemas(
            UserResponse,
            CreateUser,
            UpdateUser,
            LoginRequest,
            LoginResponse,
            MessageResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestPathResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(home))
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user))
        .route("/user/{id}", delete(delete_user))
        .route("/search", get(search_users))
        .route("/login", post(login))
        .with_state(shared_service)
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = TAG,
    responses(
        (status = 200, description = "Service banner", body = String, content_type = "text/plain")
    )
)]
async fn home() -> &'static str {
    "User Management System"
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = TAG,
    responses(
        (status = 200, description = "All users in id order", body = Vec<UserResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<UserResponse>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, response = BadRequestPathResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<UserResponse>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = TAG,
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    JsonBody(input): JsonBody<CreateUser>,
) -> UserResult<impl IntoResponse> {
    service.create_user(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully")),
    ))
}

/// Replace a user's name, email and password
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<UpdateUser>,
) -> UserResult<Json<MessageResponse>> {
    service.update_user(id, input).await?;
    Ok(Json(MessageResponse::new("User updated successfully")))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = TAG,
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, response = BadRequestPathResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<MessageResponse>> {
    service.delete_user(id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

/// Search users by name substring
#[utoipa::path(
    get,
    path = "/search",
    tag = TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching users", body = Vec<UserResponse>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> UserResult<Json<Vec<UserResponse>>> {
    let users = service.search_users(query.name.as_deref()).await?;
    Ok(Json(users))
}

/// Verify credentials
#[utoipa::path(
    post,
    path = "/login",
    tag = TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn login<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    JsonBody(input): JsonBody<LoginRequest>,
) -> UserResult<Json<LoginResponse>> {
    let user_id = service.login(input).await?;
    Ok(Json(LoginResponse::success(user_id)))
}
