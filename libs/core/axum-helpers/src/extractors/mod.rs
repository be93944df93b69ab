//! Custom extractors for Axum handlers.
//!
//! Every extractor here rejects with [`AppError`](crate::errors::AppError) so that
//! malformed requests get the same JSON error body as domain errors.

pub mod id_path;
pub mod json_body;
pub mod query_params;

pub use id_path::IdPath;
pub use json_body::JsonBody;
pub use query_params::QueryParams;
