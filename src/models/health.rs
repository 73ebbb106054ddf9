use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Version string reported by the API. Part of the wire contract, not tied
/// to `CARGO_PKG_VERSION`.
pub const API_VERSION: &str = "1.0.0";

/// Message reported by the health check endpoint.
pub const HEALTH_MESSAGE: &str = "ALX Travel App API is running successfully!";

/// # Health Status Response
///
/// Represents the operational status of the service. This is the only
/// payload the health check endpoint produces; every field is constant.
///
/// ## Fields
/// - `status`: String indicating service availability ("healthy")
/// - `message`: Fixed confirmation message
/// - `version`: API version string ("1.0.0")
///
/// ## Serialization
/// Automatically implements `Serialize` and `Deserialize` for JSON format.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "message": "ALX Travel App API is running successfully!",
///   "version": "1.0.0"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            message: HEALTH_MESSAGE.to_string(),
            version: API_VERSION.to_string(),
        }
    }
}
