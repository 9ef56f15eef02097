//! Bearer-token session extraction.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use domain::{CartSession, SessionToken};

use crate::error::ApiError;
use crate::state::AppState;

/// The caller's open cart session, resolved from `Authorization: Bearer <token>`.
pub struct AuthSession(pub CartSession);

impl FromRequestParts<Arc<AppState>> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            ApiError::Unauthorized("Authentication credentials were not provided.".to_string())
        })?;

        state
            .carts
            .get(&token)
            .await
            .map(AuthSession)
            .ok_or_else(|| ApiError::Unauthorized("Invalid or expired session".to_string()))
    }
}

fn bearer_token(parts: &Parts) -> Option<SessionToken> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then(|| SessionToken::new(token))
}
