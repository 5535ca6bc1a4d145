//! HTTP route handlers for the agent core service.

use axum::Json;

use crate::dto::{GreetingResponse, HealthResponse};

/// Root endpoint confirming the service is running.
pub async fn root() -> Json<GreetingResponse> {
    Json(GreetingResponse::current())
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_reports_running_service() {
        let Json(greeting) = root().await;
        assert_eq!(greeting.message, "Helios Agent Core is running");
        assert_eq!(greeting.version, crate::VERSION);
    }

    #[tokio::test]
    async fn health_reports_healthy_service() {
        let Json(status) = health().await;
        assert_eq!(status.status, "healthy");
        assert_eq!(status.service, "helios-agent-core");
    }
}
