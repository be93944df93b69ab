//! Query string extractor with a uniform rejection.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Query string extractor whose rejection is a 400 [`AppError`] body.
///
/// ```ignore
/// use axum_helpers::extractors::QueryParams;
///
/// async fn search(QueryParams(query): QueryParams<SearchQuery>) -> String {
///     format!("Searching for: {:?}", query.name)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(QueryParams(params))
    }
}
