//! Bearer-token authentication middleware.
//!
//! Submissions must carry a caller identity. The middleware checks that an
//! `Authorization: Bearer <token>` header with a non-empty token is present;
//! verifying the token against an identity provider is the deployment's
//! concern and sits in front of this service.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use log::debug;

use super::types::{AppState, ErrorBody};
use crate::error_handling::{ErrorType, ReportError};

/// Rejects requests without a bearer token.
pub async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim);

    match token {
        Some(token) if !token.is_empty() => next.run(request).await,
        _ => {
            debug!("Rejected unauthenticated request to {}", request.uri());
            state.stats.increment_error(ErrorType::Unauthenticated);
            (
                StatusCode::UNAUTHORIZED,
                Json(ErrorBody {
                    error: ReportError::Unauthenticated.to_string(),
                    field: None,
                }),
            )
                .into_response()
        }
    }
}
