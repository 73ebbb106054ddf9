/// # Health Status Response
///
/// Represents the operational status of the API together with a fixed
/// human-readable message and the API version.
/// Used as the response format for the health check endpoint.
///
/// ## Fields
/// - `status`: String indicating service availability ("healthy")
/// - `message`: Fixed confirmation message
/// - `version`: API version string
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "message": "ALX Travel App API is running successfully!",
///   "version": "1.0.0"
/// }
/// ```
pub mod health;

pub use health::HealthResponse;
