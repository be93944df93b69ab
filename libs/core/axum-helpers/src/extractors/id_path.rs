//! Integer id path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for integer `{id}` path parameters.
///
/// Parses the segment as `i64` and rejects with a 400 JSON body instead of
/// axum's plain-text rejection.
///
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_user(IdPath(id): IdPath) -> String {
///     format!("User ID: {}", id)
/// }
///
/// let app = Router::new().route("/users/{id}", get(get_user));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        raw.parse::<i64>()
            .map(IdPath)
            .map_err(|_| AppError::InvalidPathParam(format!("Invalid id: {}", raw)).into_response())
    }
}
