//! Append-only store of recorded sales.

use std::sync::Arc;

use chrono::NaiveDate;
use common::SaleId;
use metrics::counter;
use tokio::sync::RwLock;

use crate::query::DateRange;
use crate::sale::{NewSale, SaleRecord};
use crate::views::{self, CategorySales, DailySales, DashboardStats, SalesSummary};

struct LedgerState {
    sales: Vec<SaleRecord>,
    next_id: u64,
}

/// Shared, append-only ledger of sales.
///
/// Clones share the same underlying records. Sale ids are assigned
/// sequentially starting at 1.
#[derive(Clone)]
pub struct SalesLedger {
    state: Arc<RwLock<LedgerState>>,
}

impl SalesLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(LedgerState {
                sales: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Appends a sale and returns the stored record.
    pub async fn append(&self, sale: NewSale) -> SaleRecord {
        let mut state = self.state.write().await;
        let sale_id = SaleId::new(state.next_id);
        state.next_id += 1;

        let record = SaleRecord::from_new(sale_id, sale);
        state.sales.push(record.clone());

        counter!("sales_recorded_total", "category" => record.category.as_str()).increment(1);
        tracing::debug!(
            sale_id = %record.sale_id,
            tea_id = %record.tea_id,
            quantity = record.quantity,
            "sale recorded"
        );
        record
    }

    /// All sales in insertion order.
    pub async fn sales(&self) -> Vec<SaleRecord> {
        self.state.read().await.sales.clone()
    }

    /// Sales whose date falls inside `range`.
    pub async fn sales_in(&self, range: DateRange) -> Vec<SaleRecord> {
        let state = self.state.read().await;
        state
            .sales
            .iter()
            .filter(|sale| range.contains(sale.date()))
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.sales.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.sales.is_empty()
    }

    pub async fn daily_sales(&self, range: DateRange) -> Vec<DailySales> {
        let state = self.state.read().await;
        views::daily::build(&state.sales, range)
    }

    pub async fn category_sales(&self, range: DateRange) -> Vec<CategorySales> {
        let state = self.state.read().await;
        views::category::build(&state.sales, range)
    }

    pub async fn summary(&self, range: DateRange) -> SalesSummary {
        let state = self.state.read().await;
        views::summary::build(&state.sales, range)
    }

    pub async fn dashboard(&self, today: NaiveDate) -> DashboardStats {
        let state = self.state.read().await;
        views::dashboard::build(&state.sales, today)
    }
}

impl Default for SalesLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SalesLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesLedger").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use domain::{CatalogItem, Category, Money};

    fn uva() -> CatalogItem {
        CatalogItem::new("uva", "Uva Highlands", Category::Black, Money::from_rupees(250)).unwrap()
    }

    #[tokio::test]
    async fn test_append_assigns_sequential_ids() {
        let ledger = SalesLedger::new();

        let first = ledger.append(NewSale::of(&uva(), 2)).await;
        let second = ledger.append(NewSale::of(&uva(), 1)).await;

        assert_eq!(first.sale_id, SaleId::new(1));
        assert_eq!(second.sale_id, SaleId::new(2));
        assert_eq!(first.total_amount, Money::from_rupees(500));
        assert_eq!(ledger.len().await, 2);
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let ledger = SalesLedger::new();
        let other = ledger.clone();
        assert!(other.is_empty().await);

        ledger.append(NewSale::of(&uva(), 1).sold_by("nimal")).await;

        let sales = other.sales().await;
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].sold_by.as_deref(), Some("nimal"));
    }

    #[tokio::test]
    async fn test_sales_in_filters_by_date() {
        let ledger = SalesLedger::new();
        let may_1 = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let may_9 = Utc.with_ymd_and_hms(2024, 5, 9, 23, 59, 59).unwrap();
        ledger.append(NewSale::of(&uva(), 1).sold_at(may_1)).await;
        ledger.append(NewSale::of(&uva(), 1).sold_at(may_9)).await;

        let range = DateRange::day(may_9.date_naive());
        let sales = ledger.sales_in(range).await;

        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].sold_at, may_9);
    }
}
