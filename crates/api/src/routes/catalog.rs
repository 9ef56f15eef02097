//! Catalog listing endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use checkout::CatalogProvider;
use domain::{CatalogItem, Category};
use serde::{Deserialize, Serialize};

use crate::auth::AuthSession;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct TeaResponse {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub unit_price_cents: i64,
    pub unit_price: String,
    pub description: Option<String>,
}

impl From<CatalogItem> for TeaResponse {
    fn from(item: CatalogItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            category: item.category,
            unit_price_cents: item.unit_price.cents(),
            unit_price: item.unit_price.to_decimal_string(),
            description: item.description,
        }
    }
}

/// GET /teas?category=: lists teas by name.
#[tracing::instrument(skip(state, _session))]
pub async fn list(
    State(state): State<Arc<AppState>>,
    _session: AuthSession,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<TeaResponse>>, ApiError> {
    let category = query
        .category
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(Category::parse)
        .transpose()?;

    let items = state.catalog.list_items(category).await?;
    Ok(Json(items.into_iter().map(TeaResponse::from).collect()))
}
