//! Sales report endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use chrono::{NaiveDate, Utc};
use checkout::ReportingProvider;
use reports::{
    CategorySales, DailySales, DashboardStats, DateRange, ReportKind, TopTea, parse_date,
};
use serde::{Deserialize, Serialize};

use crate::auth::AuthSession;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ReportQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Serialize)]
pub struct ReportResponse {
    #[serde(rename = "type")]
    pub report_type: &'static str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(flatten)]
    pub body: ReportBody,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum ReportBody {
    Daily { data: Vec<DailySales> },
    Category { data: Vec<CategorySales> },
    Summary { totals: Totals, top_teas: Vec<TopTea> },
}

#[derive(Serialize)]
pub struct Totals {
    pub total_amount_cents: i64,
    pub total_quantity: u64,
    pub total_transactions: usize,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub stats: DashboardStats,
    pub date: NaiveDate,
}

fn parse_optional_date(raw: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    raw.filter(|s| !s.is_empty())
        .map(parse_date)
        .transpose()
        .map_err(ApiError::from)
}

/// GET /reports?type=&start_date=&end_date=: daily, category or summary report.
#[tracing::instrument(skip(state, _session, query), fields(kind = ?query.kind))]
pub async fn report(
    State(state): State<Arc<AppState>>,
    _session: AuthSession,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportResponse>, ApiError> {
    let kind = match query.kind.as_deref() {
        Some(raw) if !raw.is_empty() => ReportKind::parse(raw)?,
        _ => ReportKind::default(),
    };
    let today = Utc::now().date_naive();
    let range = DateRange::resolve(
        parse_optional_date(query.start_date.as_deref())?,
        parse_optional_date(query.end_date.as_deref())?,
        today,
    )?;

    let body = match kind {
        ReportKind::Daily => ReportBody::Daily {
            data: ReportingProvider::daily_sales(&state.ledger, range).await?,
        },
        ReportKind::Category => ReportBody::Category {
            data: ReportingProvider::category_sales(&state.ledger, range).await?,
        },
        ReportKind::Summary => {
            let summary = ReportingProvider::summary(&state.ledger, range).await?;
            ReportBody::Summary {
                totals: Totals {
                    total_amount_cents: summary.total_amount.cents(),
                    total_quantity: summary.total_quantity,
                    total_transactions: summary.total_transactions,
                },
                top_teas: summary.top_teas,
            }
        }
    };

    Ok(Json(ReportResponse {
        report_type: kind.as_str(),
        start_date: range.start,
        end_date: range.end,
        body,
    }))
}

/// GET /dashboard: today and month-to-date figures.
#[tracing::instrument(skip(state, _session))]
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    _session: AuthSession,
) -> Result<Json<DashboardResponse>, ApiError> {
    let today = Utc::now().date_naive();
    let stats = ReportingProvider::dashboard(&state.ledger, today).await?;
    Ok(Json(DashboardResponse { stats, date: today }))
}
