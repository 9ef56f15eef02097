//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub open_sessions: usize,
    pub catalog_items: usize,
}

/// GET /health: liveness plus a few counts.
pub async fn check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        open_sessions: state.carts.len().await,
        catalog_items: state.catalog.len().await,
    })
}
