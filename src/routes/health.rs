use crate::models::HealthResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Health Check Endpoint
///
/// Liveness probe for the ALX Travel App API, polled by load balancers and
/// orchestration systems to verify the service process is responsive.
///
/// The handler inspects nothing on the request and has no failure path: it
/// always returns the same payload.
///
/// ## Response
///
/// - **200 OK**: Service is running
///   - Content-Type: `application/json`
///   - Body: [`HealthResponse`] with `status` ("healthy"), `message`, and
///     `version` ("1.0.0")
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "message": "ALX Travel App API is running successfully!",
///   "version": "1.0.0"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is running", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::healthy())
}

/// # Route Configuration
///
/// Registers the health check endpoint with the Actix-web service
/// configuration.
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health_check);
}
