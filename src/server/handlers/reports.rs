//! Report submission handler.

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::debug;

use super::super::types::{AppState, CreatedResponse, ErrorBody};
use crate::error_handling::ReportError;
use crate::report::RawReportPayload;

/// `POST /v1/reports` handler.
///
/// Delegates to the report creation service and maps its error taxonomy onto
/// HTTP status codes. Error bodies carry the service's own display text, so
/// internal failures stay generic on the wire. Bodies the extractor cannot
/// deserialize get the same typed `invalid-argument` shape as validation
/// failures rather than axum's plain-text rejection, which would leak
/// deserializer detail.
pub async fn create_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<RawReportPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            debug!("Rejected undeserializable report body: {rejection}");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "invalid-argument: request body is not a valid report payload"
                        .to_string(),
                    field: None,
                }),
            )
                .into_response();
        }
    };

    match state.service.create_report(&payload).await {
        Ok(id) => (StatusCode::CREATED, Json(CreatedResponse { id })).into_response(),
        Err(e) => {
            let status = match &e {
                ReportError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
                ReportError::Unauthenticated => StatusCode::UNAUTHORIZED,
                ReportError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let field = match &e {
                ReportError::InvalidArgument { field, .. } => Some((*field).to_string()),
                _ => None,
            };
            (
                status,
                Json(ErrorBody {
                    error: e.to_string(),
                    field,
                }),
            )
                .into_response()
        }
    }
}
