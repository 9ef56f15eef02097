//! Checkout endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use checkout::CheckoutOutcome;
use serde::Serialize;

use crate::auth::AuthSession;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CheckoutResponse {
    pub message: String,
    #[serde(flatten)]
    pub outcome: CheckoutOutcome,
}

/// POST /checkout: records one sale per cart line.
///
/// Responds 200 when every sale was recorded and 502 when some failed; the
/// body carries `failed` and `attempted` in the latter case.
#[tracing::instrument(skip(state, session), fields(user = %session.user().username))]
pub async fn submit(
    State(state): State<Arc<AppState>>,
    AuthSession(session): AuthSession,
) -> Result<(StatusCode, Json<CheckoutResponse>), ApiError> {
    let coordinator = state.coordinator_for(session.user());
    let outcome = coordinator.checkout(session.cart()).await?;

    let status = if outcome.is_completed() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    Ok((
        status,
        Json(CheckoutResponse {
            message: outcome.message(),
            outcome,
        }),
    ))
}
