use crate::models::user::{self, User};
use actix_web::{HttpResponse, Responder, get};

/// # User Listing Endpoint
///
/// Returns the full user directory: two fixed records, always in the same
/// order. There is no storage behind this; the directory is compiled in, so
/// the handler has no failure path.
///
/// ## Response
///
/// - **200 OK**: JSON array of all user records
///
/// ## Example Response
///
/// ```json
/// [
///   { "id": 1, "name": "John Doe", "email": "john@example.com" },
///   { "id": 2, "name": "Jane Smith", "email": "jane@example.com" }
/// ]
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All user records in listing order", body = [User])
    ),
    tag = "Users"
)]
#[get("/users")]
pub async fn list_users() -> impl Responder {
    HttpResponse::Ok().json(user::directory())
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(list_users);
}
