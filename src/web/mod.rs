//! The web surface: one HTML page plus a small JSON API.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::RunshotError;

pub mod error;
pub mod handlers;
pub mod page;
pub mod state;

pub use state::AppState;

/// Upload cap per request; phone screenshots run a few MB each.
pub const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/api/convert", post(handlers::api_convert))
        .route("/api/models", get(handlers::list_models))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<(), RunshotError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "runshot listening");
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}
