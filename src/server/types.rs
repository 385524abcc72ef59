//! HTTP server data structures.

use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::error_handling::ServiceStats;
use crate::report::ReportCreationService;

/// Shared state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    /// Report creation pipeline shared by all request tasks
    pub service: Arc<ReportCreationService>,
    /// Counters surfaced on the status endpoint
    pub stats: Arc<ServiceStats>,
    /// When the server started, for uptime reporting
    pub start_time: Arc<Instant>,
}

/// JSON response for a successful report creation
#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// JSON error body for rejected requests
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// JSON response for the `/status` endpoint
#[derive(Serialize)]
pub struct StatusResponse {
    pub reports_created: usize,
    pub elapsed_seconds: f64,
    pub errors: ErrorCounts,
}

#[derive(Serialize)]
pub struct ErrorCounts {
    pub total: usize,
    pub validation: ValidationCounts,
    pub unauthenticated: usize,
    pub geohash: usize,
    pub persistence: usize,
}

#[derive(Serialize)]
pub struct ValidationCounts {
    pub total: usize,
    pub invalid_coordinates: usize,
    pub invalid_tactics: usize,
    pub invalid_enum_field: usize,
    pub invalid_source_url: usize,
    pub invalid_date: usize,
}
