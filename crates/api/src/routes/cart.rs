//! Session cart endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use checkout::{CatalogProvider, ServiceError};
use common::{LineId, TeaId};
use domain::{Cart, LineItem, QuantityChange};
use serde::{Deserialize, Serialize};

use crate::auth::AuthSession;
use crate::error::ApiError;
use crate::state::AppState;

// -- Request types --

#[derive(Deserialize)]
pub struct AddItemRequest {
    pub tea_id: String,
    pub quantity: Option<i64>,
}

/// Either an absolute `quantity` or a relative `delta`.
#[derive(Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: Option<i64>,
    pub delta: Option<i64>,
}

// -- Response types --

#[derive(Serialize)]
pub struct CartResponse {
    pub lines: Vec<LineResponse>,
    pub item_count: u64,
    pub total_cents: i64,
    pub total: String,
}

#[derive(Serialize)]
pub struct LineResponse {
    pub line_id: String,
    pub tea_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

#[derive(Serialize)]
pub struct AddItemResponse {
    pub line_id: String,
    pub cart: CartResponse,
}

#[derive(Serialize)]
pub struct UpdateQuantityResponse {
    pub change: &'static str,
    pub cart: CartResponse,
}

impl From<&LineItem> for LineResponse {
    fn from(line: &LineItem) -> Self {
        Self {
            line_id: line.line_id().to_string(),
            tea_id: line.item().id.to_string(),
            name: line.item().name.clone(),
            quantity: line.quantity(),
            unit_price_cents: line.unit_price().cents(),
            line_total_cents: line.line_total().cents(),
        }
    }
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(LineResponse::from).collect(),
            item_count: cart.item_count(),
            total_cents: cart.total().cents(),
            total: cart.total().to_decimal_string(),
        }
    }
}

fn parse_line_id(raw: &str) -> Result<LineId, ApiError> {
    raw.parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid line id: {e}")))
}

fn change_label(change: QuantityChange) -> &'static str {
    match change {
        QuantityChange::Updated { .. } => "updated",
        QuantityChange::Removed => "removed",
        QuantityChange::Unchanged => "unchanged",
        QuantityChange::NotFound => "not_found",
    }
}

// -- Handlers --

/// GET /cart: current lines and totals.
#[tracing::instrument(skip(session))]
pub async fn get(AuthSession(session): AuthSession) -> Json<CartResponse> {
    let cart = session.cart().read().await;
    Json(CartResponse::from(&*cart))
}

/// POST /cart/items: adds a tea, merging with an existing line.
#[tracing::instrument(skip(state, session, payload))]
pub async fn add_item(
    State(state): State<Arc<AppState>>,
    AuthSession(session): AuthSession,
    payload: Result<Json<AddItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AddItemResponse>), ApiError> {
    let Json(req) = payload?;
    let tea_id = TeaId::new(req.tea_id);
    let item = state
        .catalog
        .get_item(&tea_id)
        .await?
        .ok_or(ServiceError::UnknownTea(tea_id))?;

    let quantity = req.quantity.unwrap_or(1);
    let response = session
        .cart()
        .with(|cart| {
            cart.add_item(item, quantity).map(|line_id| AddItemResponse {
                line_id: line_id.to_string(),
                cart: CartResponse::from(&*cart),
            })
        })
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// PATCH /cart/items/{line_id}: sets or adjusts a quantity; zero or less removes the line.
#[tracing::instrument(skip(session, payload))]
pub async fn update_item(
    AuthSession(session): AuthSession,
    Path(line_id): Path<String>,
    payload: Result<Json<UpdateQuantityRequest>, JsonRejection>,
) -> Result<Json<UpdateQuantityResponse>, ApiError> {
    let line_id = parse_line_id(&line_id)?;
    let Json(req) = payload?;
    let response = session
        .cart()
        .with(|cart| {
            let change = match (req.quantity, req.delta) {
                (Some(quantity), _) => cart.update_quantity(line_id, quantity),
                (None, Some(delta)) => cart.adjust_quantity(line_id, delta),
                (None, None) => {
                    return Err(ApiError::BadRequest(
                        "Must include quantity or delta".to_string(),
                    ));
                }
            };
            change
                .map(|change| UpdateQuantityResponse {
                    change: change_label(change),
                    cart: CartResponse::from(&*cart),
                })
                .map_err(ApiError::from)
        })
        .await?;

    Ok(Json(response))
}

/// DELETE /cart/items/{line_id}: removes a line if present.
#[tracing::instrument(skip(session))]
pub async fn remove_item(
    AuthSession(session): AuthSession,
    Path(line_id): Path<String>,
) -> Result<Json<CartResponse>, ApiError> {
    let line_id = parse_line_id(&line_id)?;
    let response = session
        .cart()
        .with(|cart| {
            cart.remove_item(line_id);
            Ok::<_, ApiError>(CartResponse::from(&*cart))
        })
        .await?;

    Ok(Json(response))
}

/// DELETE /cart: empties the cart.
#[tracing::instrument(skip(session))]
pub async fn clear(AuthSession(session): AuthSession) -> Result<Json<CartResponse>, ApiError> {
    let response = session
        .cart()
        .with(|cart| {
            cart.clear();
            Ok::<_, ApiError>(CartResponse::from(&*cart))
        })
        .await?;
    Ok(Json(response))
}
