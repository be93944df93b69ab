use axum::Router;

pub mod health;
pub mod users;

/// Creates the API routes.
///
/// Returns a stateless Router (all sub-routers have state already applied).
/// Routes are mounted at the root: `/`, `/users`, `/user/{id}`, `/search`, `/login`.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().merge(users::router(state))
}

/// Creates a router with the /ready endpoint that performs an actual database check.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
