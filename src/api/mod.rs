//! REST API for production planning.
//!
//! Provides one endpoint:
//! - `POST /productionplan`: plan a request body, respond with one
//!   `{name, p}` entry per plant

mod error;
mod handlers;
mod types;

pub use error::ApiError;
pub use types::ErrorResponse;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use tower_http::trace::TraceLayer;

use crate::logging::shutdown_signal;
use crate::plan::Planner;

/// Application state shared across all request handlers.
///
/// The planner holds no per-request data, so no locks are needed.
#[derive(Debug, Default)]
pub struct AppState {
    pub planner: Planner,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/productionplan", post(handlers::production_plan))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds to the given address and serves the API until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    tracing::info!(addr = %local, "API server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("API server stopped");
    Ok(())
}
