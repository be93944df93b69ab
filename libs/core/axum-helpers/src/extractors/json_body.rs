//! JSON body extractor with a uniform rejection.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON extractor whose rejection is a 400 [`AppError`] body.
///
/// Axum's own `Json` answers 415 for a missing content type and 422 for a
/// shape mismatch; this service treats every unreadable body as a bad request.
/// Field presence is checked by the domain layer, so DTOs typically declare
/// their fields as `Option<_>`.
///
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create_user(JsonBody(payload): JsonBody<CreateUser>) -> String {
///     format!("Creating user: {:?}", payload.name)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(JsonBody(data))
    }
}
