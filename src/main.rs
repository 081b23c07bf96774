use std::io;

use actix_web::{App, HttpServer};
use tracing_subscriber::EnvFilter;
use user_directory::config::ServerConfig;
use user_directory::openapi::ApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// User Directory Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Explicit route table registered at startup (health check, user listing)
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - Health check: `GET /health`
/// - User listing: `GET /api/users`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `HOST:PORT`, defaulting to `0.0.0.0:8080`
/// - Environment variables loaded from `.env` file (if present)
///
/// The only failure modes are startup failures: a misconfigured port or an
/// unavailable bind address. Both are reported and exit the process non-zero.
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    tracing::info!(host = %config.host, port = config.port, "starting user directory API");

    let server = HttpServer::new(|| {
        let openapi = ApiDoc::openapi();

        App::new()
            .configure(user_directory::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((config.host.as_str(), config.port))
    .map_err(|e| {
        tracing::error!(host = %config.host, port = config.port, error = %e, "failed to bind listener");
        e
    })?;

    server.run().await
}
