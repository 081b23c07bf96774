/// # Health Status Response
///
/// Status payload returned by the health check endpoint, stamped with the
/// time of the check.
pub mod health;

/// # User Directory Records
///
/// The fixed set of user records served by the directory endpoint.
pub mod user;

pub use health::HealthResponse;
pub use user::User;
