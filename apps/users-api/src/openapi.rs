use utoipa::OpenApi;

/// Service-level endpoints and shared schemas
#[derive(OpenApi)]
#[openapi(
    paths(crate::api::health::ready_handler),
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "User Management API",
        version = "0.1.0",
        description = "CRUD, search and login over the users table"
    ),
    tags(
        (name = "health", description = "Liveness and readiness")
    )
)]
struct ServiceDoc;

/// Complete API documentation: service endpoints plus the users domain
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        ServiceDoc::openapi().merge_from(domain_users::ApiDoc::openapi())
    }
}
