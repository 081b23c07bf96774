use actix_web::web;

/// # Health Check Endpoint
///
/// `GET /health`, mounted at the root scope so probes reach it without the
/// `/api` prefix.
pub mod health;

/// # User Listing Endpoint
///
/// `GET /api/users`, the fixed user directory.
pub mod users;

/// # Route Table
///
/// Registers every route explicitly at startup: the health check at the root
/// scope and the user listing under the `/api` base path. Handlers are pure
/// functions of no shared state, so the table is the complete wiring; there
/// is no other registration mechanism.
///
/// ```text
/// GET /health    - Service health status
/// GET /api/users - Fixed user directory
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    cfg.service(web::scope("/api").configure(users::configure_routes));
}
