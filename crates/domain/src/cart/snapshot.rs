use serde::Serialize;

use super::LineItem;
use crate::money::Money;

/// Point-in-time copy of a cart's lines and totals.
///
/// Checkout works from a snapshot so the numbers it reports are the ones
/// the cart held before any sale was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
    lines: Vec<LineItem>,
    item_count: u64,
    total: Money,
}

impl CartSnapshot {
    pub(super) fn new(lines: Vec<LineItem>) -> Self {
        let item_count = lines.iter().map(|l| u64::from(l.quantity())).sum();
        let total = lines.iter().map(LineItem::line_total).sum();
        Self {
            lines,
            item_count,
            total,
        }
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    pub fn total(&self) -> Money {
        self.total
    }
}
