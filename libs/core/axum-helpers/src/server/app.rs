use super::shutdown::shutdown_signal;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::security::security_headers;
use axum::{middleware, Router};
use core_config::server::ServerConfig;
use std::io;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Binds the configured address and serves `router` until SIGINT/SIGTERM.
///
/// # Errors
/// Returns an error if the listener cannot bind (e.g. the port is already in
/// use) or the server fails while running.
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = TcpListener::bind(server_config.address()).await?;
    serve(listener, router).await
}

/// Serves `router` on an already-bound listener with graceful shutdown.
pub async fn serve(listener: TcpListener, router: Router) -> io::Result<()> {
    info!("Server starting on {}", listener.local_addr()?);

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })
}

/// Wraps stateless API routes with docs and cross-cutting middleware.
///
/// Adds:
/// - Swagger UI at `/swagger-ui` serving `/api-docs/openapi.json`
/// - JSON 404 and 405 fallbacks
/// - Request tracing at INFO
/// - Security headers
///
/// Routes are mounted at the root; domain routers apply their own state
/// before being passed in.
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(apis)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
}
