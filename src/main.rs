use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{App, HttpServer, web::Data};
use alx_travel_app::openapi::ApiDoc;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Fallback log filter when `RUST_LOG` is unset. Server-level records from
/// actix-web are wanted too, so this is not scoped to the crate.
const DEFAULT_LOG_FILTER: &str = "info";

/// ALX Travel App API Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Health check endpoint (configured in routes)
/// - Request logging via `middleware::Logger`
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - Health check: `/health` (trailing-slash tolerant via path normalization)
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `HOST:PORT`, defaulting to `127.0.0.1:8080`
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    // fmt's log bridge also captures the Logger middleware's records
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    tracing::info!("Starting ALX Travel App API on {host}:{port}");

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .app_data(Data::new(openapi.clone()))
            .configure(alx_travel_app::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((host, port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter_is_valid_and_unscoped() {
        // The fallback must be a parseable directive covering all targets,
        // not just this crate
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        assert_eq!(DEFAULT_LOG_FILTER, "info");
    }
}
