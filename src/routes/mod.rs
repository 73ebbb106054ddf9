use actix_web::web;

/// # Health Check Endpoint
///
/// Returns a fixed payload confirming the API is up.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("healthy"), `message`, and `version`
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
pub mod health;

/// # API Route Configuration
///
/// Registers all endpoints with the Actix-web service configuration.
///
/// ## Currently Configured Routes
///
/// - `GET /health`: Health check endpoint (see [`health::configure_routes`])
///
/// The server wraps `NormalizePath::trim()`, so `GET /health/` resolves to
/// the same handler.
///
/// [`health::configure_routes`]: crate::routes::health::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);
}
