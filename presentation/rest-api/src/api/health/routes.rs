use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

impl HealthCheckResponse {
    fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Liveness check for the recipes service.
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Public. Returns `healthy`, the server time (RFC 3339) and the crate version.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse::healthy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_healthy_with_crate_version() {
        let response = HealthCheckResponse::healthy();

        assert_eq!(response.status, "healthy");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
        assert!(chrono::DateTime::parse_from_rfc3339(&response.timestamp).is_ok());
    }
}
