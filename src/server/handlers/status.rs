//! JSON status handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::super::types::{AppState, ErrorCounts, StatusResponse, ValidationCounts};
use crate::error_handling::ErrorType;

/// JSON status endpoint with service counters
pub async fn status_handler(State(state): State<AppState>) -> Response {
    let stats = &state.stats;
    let response = StatusResponse {
        reports_created: stats.created_count(),
        elapsed_seconds: state.start_time.elapsed().as_secs_f64(),
        errors: ErrorCounts {
            total: stats.total_errors(),
            validation: ValidationCounts {
                total: stats.validation_failures(),
                invalid_coordinates: stats.get_error_count(ErrorType::InvalidCoordinates),
                invalid_tactics: stats.get_error_count(ErrorType::InvalidTactics),
                invalid_enum_field: stats.get_error_count(ErrorType::InvalidEnumField),
                invalid_source_url: stats.get_error_count(ErrorType::InvalidSourceUrl),
                invalid_date: stats.get_error_count(ErrorType::InvalidDate),
            },
            unauthenticated: stats.get_error_count(ErrorType::Unauthenticated),
            geohash: stats.get_error_count(ErrorType::GeohashError),
            persistence: stats.get_error_count(ErrorType::PersistenceError),
        },
    };

    let json = match serde_json::to_string_pretty(&response) {
        Ok(json) => json,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize status: {}", e),
            )
                .into_response();
        }
    };

    (StatusCode::OK, [("content-type", "application/json")], json).into_response()
}
