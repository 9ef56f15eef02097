//! Recorded sales.

use chrono::{DateTime, NaiveDate, Utc};
use common::{SaleId, TeaId};
use domain::{CatalogItem, Category, Money};
use serde::Serialize;

/// A sale to be appended to the ledger.
#[derive(Debug, Clone)]
pub struct NewSale {
    pub tea_id: TeaId,
    pub tea_name: String,
    pub category: Category,
    pub quantity: u32,
    pub unit_price: Money,
    pub sold_at: DateTime<Utc>,
    pub sold_by: Option<String>,
}

impl NewSale {
    /// Prices a sale of `quantity` units at the item's current catalog price.
    pub fn of(item: &CatalogItem, quantity: u32) -> Self {
        Self {
            tea_id: item.id.clone(),
            tea_name: item.name.clone(),
            category: item.category,
            quantity,
            unit_price: item.unit_price,
            sold_at: Utc::now(),
            sold_by: None,
        }
    }

    pub fn sold_at(mut self, sold_at: DateTime<Utc>) -> Self {
        self.sold_at = sold_at;
        self
    }

    pub fn sold_by(mut self, username: impl Into<String>) -> Self {
        self.sold_by = Some(username.into());
        self
    }
}

/// A sale as stored in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleRecord {
    pub sale_id: SaleId,
    pub tea_id: TeaId,
    pub tea_name: String,
    pub category: Category,
    pub quantity: u32,
    pub unit_price: Money,
    pub total_amount: Money,
    pub sold_at: DateTime<Utc>,
    pub sold_by: Option<String>,
}

impl SaleRecord {
    pub(crate) fn from_new(sale_id: SaleId, sale: NewSale) -> Self {
        Self {
            sale_id,
            total_amount: sale.unit_price.multiply(sale.quantity),
            tea_id: sale.tea_id,
            tea_name: sale.tea_name,
            category: sale.category,
            quantity: sale.quantity,
            unit_price: sale.unit_price,
            sold_at: sale.sold_at,
            sold_by: sale.sold_by,
        }
    }

    /// Calendar date of the sale (UTC).
    pub fn date(&self) -> NaiveDate {
        self.sold_at.date_naive()
    }
}
