//! Response payloads for the fixed API surface.
//!
//! Each payload is built fresh per request and serializes with a stable
//! field order, so repeated responses are byte-identical.

use serde::Serialize;

use crate::{SERVICE_NAME, SERVICE_TITLE, VERSION};

/// Body returned by `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct GreetingResponse {
    pub message: String,
    pub version: String,
}

impl GreetingResponse {
    /// Greeting for the running service.
    pub fn current() -> Self {
        Self {
            message: format!("{} is running", SERVICE_TITLE),
            version: VERSION.to_string(),
        }
    }
}

/// Body returned by `GET /api/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    /// Status report for a live process.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}
