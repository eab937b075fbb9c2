//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with link store status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub storage: String,
    pub links: usize,
}
