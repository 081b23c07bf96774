use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Reports whether the service is operational, together with the moment the
/// check ran.
///
/// ## Fields
/// - `status`: service availability, always `"UP"` while the process serves
/// - `timestamp`: RFC 3339 timestamp of the check
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2026-08-07T15:30:45.123456789+00:00"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    /// Builds an `"UP"` response stamped with the current time. A fresh value
    /// is constructed per request; nothing is cached or stored.
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
