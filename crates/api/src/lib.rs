//! HTTP service shell for the tea counter.
//!
//! Each login opens a session that owns one cart. Handlers expose the cart,
//! the catalog, checkout and sales reports, with structured logging
//! (tracing) and Prometheus metrics.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, patch, post};
use checkout::{InMemoryCatalog, InMemorySessionProvider, ServiceError};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use state::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/login", post(routes::session::login))
        .route("/logout", post(routes::session::logout))
        .route("/teas", get(routes::catalog::list))
        .route("/cart", get(routes::cart::get).delete(routes::cart::clear))
        .route("/cart/items", post(routes::cart::add_item))
        .route(
            "/cart/items/{line_id}",
            patch(routes::cart::update_item).delete(routes::cart::remove_item),
        )
        .route("/checkout", post(routes::checkout::submit))
        .route("/reports", get(routes::reports::report))
        .route("/dashboard", get(routes::reports::dashboard))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state: the house catalog (unless
/// disabled), the default staff accounts and an empty ledger.
pub async fn create_default_state(config: &Config) -> Result<Arc<AppState>, ServiceError> {
    let catalog = if config.seed_catalog {
        InMemoryCatalog::ceylon()?
    } else {
        InMemoryCatalog::new()
    };
    let sessions = InMemorySessionProvider::with_default_staff().await;

    let teas = catalog.len().await;
    tracing::info!(
        teas,
        partial_failure = config.partial_failure.as_str(),
        timeout_ms = config.checkout_timeout.map(|t| t.as_millis() as u64),
        "application state ready"
    );
    Ok(Arc::new(AppState::new(catalog, sessions, config.checkout())))
}
