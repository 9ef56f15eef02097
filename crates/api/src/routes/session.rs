//! Login and logout endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use checkout::SessionProvider;
use domain::{CartSession, User};
use serde::{Deserialize, Serialize};

use crate::auth::AuthSession;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Serialize)]
pub struct LogoutResponse {
    pub logged_out: bool,
}

/// POST /login: opens a session with an empty cart.
#[tracing::instrument(skip(state, payload))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(req) = payload?;
    tracing::debug!(username = %req.username, "login attempt");
    let session = state.sessions.login(&req.username, &req.password).await?;
    let response = LoginResponse {
        token: session.token.to_string(),
        user: session.user.clone(),
    };

    state.carts.insert(CartSession::start(session)).await;
    metrics::gauge!("open_sessions").set(state.carts.len().await as f64);
    Ok(Json(response))
}

/// POST /logout: closes the session and discards its cart.
#[tracing::instrument(skip(state, session))]
pub async fn logout(
    State(state): State<Arc<AppState>>,
    AuthSession(session): AuthSession,
) -> Result<Json<LogoutResponse>, ApiError> {
    let token = session.token().clone();
    state.sessions.logout(&token).await?;

    if let Some(removed) = state.carts.remove(&token).await {
        removed.end().await;
    }
    metrics::gauge!("open_sessions").set(state.carts.len().await as f64);
    Ok(Json(LogoutResponse { logged_out: true }))
}
