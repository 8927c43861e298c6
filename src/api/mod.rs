//! REST API for the resolved offering and projection results.
//!
//! Provides two GET endpoints:
//! - `/state` — offering, payment plan, active price, and energy metrics
//! - `/projection` — the 36-month series with optional range filtering

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::catalog::{PaymentType, ProductOffering};
use crate::engine::types::ProjectionResult;

/// Immutable application state shared across all request handlers.
///
/// Constructed once after the projection completes and wrapped in `Arc`;
/// no locks needed since all data is read-only.
pub struct AppState {
    /// Resolved product offering.
    pub offering: ProductOffering,
    /// Selected payment plan.
    pub payment: PaymentType,
    /// Price applicable under the selected plan.
    pub active_price: f64,
    /// Complete projection output.
    pub result: ProjectionResult,
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/state", get(handlers::get_state))
        .route("/projection", get(handlers::get_projection))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `addr` - Socket address to bind to
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
