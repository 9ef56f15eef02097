//! Sale recording service trait and in-memory implementation.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use common::TeaId;
use reports::{NewSale, SalesLedger};
use tokio::sync::RwLock;

use super::catalog::{CatalogProvider, InMemoryCatalog};
use crate::error::{ServiceError, ServiceResult};
use crate::outcome::RecordedSale;

/// Records one sale per call.
#[async_trait]
pub trait SalesRecorder: Send + Sync {
    /// Records a sale of `quantity` units of `tea_id` at the current catalog price.
    async fn record_sale(&self, tea_id: &TeaId, quantity: u32) -> ServiceResult<RecordedSale>;
}

#[derive(Debug, Default)]
struct InMemorySalesState {
    fail_all: bool,
    fail_for: HashSet<TeaId>,
    delay: Option<Duration>,
    calls: usize,
}

/// In-memory sales recorder backed by a [`SalesLedger`].
///
/// Clones share the ledger, the failure settings and the call counter.
#[derive(Debug, Clone)]
pub struct InMemorySalesRecorder {
    catalog: InMemoryCatalog,
    ledger: SalesLedger,
    seller: Option<String>,
    state: Arc<RwLock<InMemorySalesState>>,
}

impl InMemorySalesRecorder {
    /// Creates a recorder that prices sales from `catalog` and appends them to `ledger`.
    pub fn new(catalog: InMemoryCatalog, ledger: SalesLedger) -> Self {
        Self {
            catalog,
            ledger,
            seller: None,
            state: Arc::new(RwLock::new(InMemorySalesState::default())),
        }
    }

    /// Returns a handle that attributes its sales to `username`.
    pub fn acting_as(&self, username: impl Into<String>) -> Self {
        Self {
            seller: Some(username.into()),
            ..self.clone()
        }
    }

    pub fn ledger(&self) -> &SalesLedger {
        &self.ledger
    }

    /// Configures every sale of `tea_id` to fail.
    pub async fn fail_for(&self, tea_id: impl Into<TeaId>) {
        self.state.write().await.fail_for.insert(tea_id.into());
    }

    /// Configures every sale to fail, or clears that setting.
    pub async fn set_fail_all(&self, fail: bool) {
        self.state.write().await.fail_all = fail;
    }

    /// Delays every call by `delay` before it is processed.
    pub async fn set_delay(&self, delay: Option<Duration>) {
        self.state.write().await.delay = delay;
    }

    /// Clears all failure and delay settings.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        state.fail_all = false;
        state.fail_for.clear();
        state.delay = None;
    }

    /// Number of `record_sale` calls received.
    pub async fn call_count(&self) -> usize {
        self.state.read().await.calls
    }
}

#[async_trait]
impl SalesRecorder for InMemorySalesRecorder {
    #[tracing::instrument(skip(self))]
    async fn record_sale(&self, tea_id: &TeaId, quantity: u32) -> ServiceResult<RecordedSale> {
        let (fail, delay) = {
            let mut state = self.state.write().await;
            state.calls += 1;
            (
                state.fail_all || state.fail_for.contains(tea_id),
                state.delay,
            )
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if fail {
            return Err(ServiceError::SaleRejected {
                tea_id: tea_id.clone(),
                reason: "Failed to record sale".to_string(),
            });
        }

        if quantity == 0 {
            return Err(ServiceError::SaleRejected {
                tea_id: tea_id.clone(),
                reason: "Quantity must be greater than 0".to_string(),
            });
        }

        let item = self
            .catalog
            .get_item(tea_id)
            .await?
            .ok_or_else(|| ServiceError::UnknownTea(tea_id.clone()))?;

        let mut sale = NewSale::of(&item, quantity);
        if let Some(seller) = &self.seller {
            sale = sale.sold_by(seller.clone());
        }
        let record = self.ledger.append(sale).await;

        Ok(RecordedSale::from(&record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::SaleId;
    use domain::{CatalogItem, Category, Money};

    fn recorder() -> InMemorySalesRecorder {
        let catalog = InMemoryCatalog::with_items([
            CatalogItem::new("A", "Uva", Category::Black, Money::from_rupees(250)).unwrap(),
            CatalogItem::new("B", "Sencha", Category::Green, Money::from_cents(8_050)).unwrap(),
        ]);
        InMemorySalesRecorder::new(catalog, SalesLedger::new())
    }

    #[tokio::test]
    async fn test_record_sale_prices_from_catalog() {
        let recorder = recorder();

        let sale = recorder.record_sale(&TeaId::new("B"), 3).await.unwrap();

        assert_eq!(sale.sale_id, SaleId::new(1));
        assert_eq!(sale.unit_price, Money::from_cents(8_050));
        assert_eq!(sale.total_amount, Money::from_cents(24_150));
        assert_eq!(recorder.ledger().len().await, 1);
        assert_eq!(recorder.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_tea() {
        let recorder = recorder();
        let err = recorder.record_sale(&TeaId::new("Z"), 1).await.unwrap_err();
        assert_eq!(err, ServiceError::UnknownTea(TeaId::new("Z")));
        assert!(recorder.ledger().is_empty().await);
    }

    #[tokio::test]
    async fn test_zero_quantity_rejected() {
        let recorder = recorder();
        let err = recorder.record_sale(&TeaId::new("A"), 0).await.unwrap_err();
        assert!(matches!(err, ServiceError::SaleRejected { .. }));
    }

    #[tokio::test]
    async fn test_fail_for_only_affects_that_tea() {
        let recorder = recorder();
        recorder.fail_for("B").await;

        assert!(recorder.record_sale(&TeaId::new("B"), 1).await.is_err());
        assert!(recorder.record_sale(&TeaId::new("A"), 1).await.is_ok());
        assert_eq!(recorder.ledger().len().await, 1);
        assert_eq!(recorder.call_count().await, 2);
    }

    #[tokio::test]
    async fn test_fail_all_and_reset() {
        let recorder = recorder();
        recorder.set_fail_all(true).await;
        assert!(recorder.record_sale(&TeaId::new("A"), 1).await.is_err());

        recorder.reset().await;
        assert!(recorder.record_sale(&TeaId::new("A"), 1).await.is_ok());
    }

    #[tokio::test]
    async fn test_acting_as_attributes_seller_and_shares_state() {
        let recorder = recorder();
        let cashier = recorder.acting_as("cashier");
        recorder.fail_for("B").await;

        cashier.record_sale(&TeaId::new("A"), 2).await.unwrap();
        assert!(cashier.record_sale(&TeaId::new("B"), 1).await.is_err());

        let sales = recorder.ledger().sales().await;
        assert_eq!(sales[0].sold_by.as_deref(), Some("cashier"));
        assert_eq!(recorder.call_count().await, 2);
    }
}
