//! Cart lines and validated quantities.

use std::num::NonZeroU32;

use common::LineId;
use serde::Serialize;

use super::CartError;
use crate::catalog::CatalogItem;
use crate::money::Money;

/// A positive line quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// Validates a raw quantity. Zero, negative and oversized values are rejected.
    pub fn new(quantity: i64) -> Result<Self, CartError> {
        u32::try_from(quantity)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(CartError::InvalidQuantity { quantity })
    }

    /// Parses user-entered quantity text.
    pub fn parse(input: &str) -> Result<Self, CartError> {
        let value: i64 = input
            .trim()
            .parse()
            .map_err(|_| CartError::InvalidQuantityInput {
                input: input.to_string(),
            })?;
        Self::new(value)
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row in the cart.
///
/// `quantity` is always at least 1; the cart removes a line instead of
/// letting it reach zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    line_id: LineId,
    item: CatalogItem,
    quantity: u32,
}

impl LineItem {
    pub(super) fn new(item: CatalogItem, quantity: Quantity) -> Self {
        Self {
            line_id: LineId::new(),
            item,
            quantity: quantity.get(),
        }
    }

    pub(super) fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity.get();
    }

    /// Returns the line identifier.
    pub fn line_id(&self) -> LineId {
        self.line_id
    }

    /// Returns the catalog item as captured when it was added.
    pub fn item(&self) -> &CatalogItem {
        &self.item
    }

    /// Returns the quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the unit price captured at add-time.
    pub fn unit_price(&self) -> Money {
        self.item.unit_price
    }

    /// Returns unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.item.unit_price.multiply(self.quantity)
    }
}
