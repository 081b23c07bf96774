use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros. Served through Swagger UI at `/swagger-ui/` with the raw spec at
/// `/api-docs/openapi.json`.
///
/// # Endpoints
/// - Health Check: `GET /health`
/// - User Listing: `GET /api/users`
///
/// # Schemas
/// - `HealthResponse`: Service status payload
/// - `User`: Directory record
///
/// # Note
/// The spec is generated at compile time from these annotations. Any change to
/// the API surface should be reflected here first to keep the documentation
/// accurate.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::users::list_users,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::user::User
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Users", description = "User directory endpoints")
    ),
    info(
        description = "Static user directory API with a health probe",
        title = "User Directory API",
        version = "0.1.0+sprint1",
    )
)]
pub struct ApiDoc;
