//! HTTP server for report submission and monitoring.
//!
//! Provides two endpoints:
//! - `POST /v1/reports` - authenticated report submission
//! - `GET /status` - JSON status endpoint with service counters
//!
//! Submission requires a bearer token; the status endpoint is open.

mod auth;
mod handlers;
mod types;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use auth::require_auth;
use handlers::{create_report_handler, status_handler};
pub use types::AppState;

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/reports", post(create_report_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ))
        .route("/status", get(status_handler))
        .with_state(state)
}

/// Serves the application on an already-bound listener.
///
/// Taking the listener rather than a port lets tests bind to an ephemeral
/// port first and read the address back.
pub async fn start_server(listener: TcpListener, state: AppState) -> Result<(), anyhow::Error> {
    let app = build_router(state);

    let addr = listener
        .local_addr()
        .map_err(|e| anyhow::anyhow!("Failed to read server address: {}", e))?;
    log::info!("Report server listening on http://{}/", addr);
    log::info!("  - Submit: POST http://{}/v1/reports", addr);
    log::info!("  - Status: GET http://{}/status", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Report server error: {}", e))?;

    Ok(())
}
