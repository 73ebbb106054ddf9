use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros.
///
/// # Endpoints
/// - Health Check: `GET /health`
///
/// # Schemas
/// - `HealthResponse`: Service status payload
///
/// # API Information
/// - **Title**: ALX Travel App API
/// - **Version**: 1.0.0
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any
/// changes to the API surface should be reflected here first to maintain
/// documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::health::health_check),
    components(schemas(crate::models::health::HealthResponse)),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints")
    ),
    info(
        description = "Liveness API for the ALX Travel App",
        title = "ALX Travel App API",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;
