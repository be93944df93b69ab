//! Application-specific readiness handler with a real database check.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::sqlite::{check_health, close};

/// Readiness check endpoint that opens a connection and runs `SELECT 1`.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable"),
        (status = 503, description = "Database unreachable")
    )
)]
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            let db = state
                .connector
                .open()
                .await
                .map_err(|e| e.to_string())?;
            let result = check_health(&db)
                .await
                .map_err(|e| e.to_string());
            close(db).await;
            result
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
