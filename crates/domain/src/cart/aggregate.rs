//! Cart aggregate.

use common::{LineId, TeaId};
use serde::Serialize;

use super::{CartError, CartSnapshot, LineItem, Quantity};
use crate::catalog::CatalogItem;
use crate::money::Money;

/// What an `update_quantity` call did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line now carries a different quantity.
    Updated { from: u32, to: u32 },
    /// The requested quantity was zero or negative, so the line was dropped.
    Removed,
    /// The line already had the requested quantity.
    Unchanged,
    /// No line with that ID exists.
    NotFound,
}

/// Shopping cart.
///
/// Lines are kept in insertion order and there is at most one line per tea.
/// Item count and total are recomputed from the lines on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<LineItem>,
}

// Query methods
impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lines in insertion order.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Returns a line by ID.
    pub fn get(&self, line_id: LineId) -> Option<&LineItem> {
        self.lines.iter().find(|l| l.line_id() == line_id)
    }

    /// Returns the line holding the given tea.
    pub fn find_by_tea(&self, tea_id: &TeaId) -> Option<&LineItem> {
        self.lines.iter().find(|l| &l.item().id == tea_id)
    }

    /// Returns the number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the sum of all line quantities.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity())).sum()
    }

    /// Returns the sum of unit price × quantity over all lines.
    pub fn total(&self) -> Money {
        self.lines.iter().map(LineItem::line_total).sum()
    }

    /// Takes an owned copy of the current lines together with their totals.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::new(self.lines.clone())
    }

    fn position(&self, line_id: LineId) -> Option<usize> {
        self.lines.iter().position(|l| l.line_id() == line_id)
    }
}

// Mutation methods
impl Cart {
    /// Adds `quantity` units of a tea.
    ///
    /// A tea already in the cart has its quantity incremented and keeps its
    /// position; a new tea is appended. Returns the ID of the affected line.
    pub fn add_item(&mut self, item: CatalogItem, quantity: i64) -> Result<LineId, CartError> {
        let added = Quantity::new(quantity)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.item().id == item.id) {
            let requested = i64::from(line.quantity()) + i64::from(added.get());
            let merged = Quantity::new(requested).map_err(|_| CartError::QuantityOverflow {
                tea_id: item.id.clone(),
                requested,
                max: u32::MAX,
            })?;
            line.set_quantity(merged);
            metrics::counter!("cart_mutations_total", "op" => "increment").increment(1);
            return Ok(line.line_id());
        }

        let line = LineItem::new(item, added);
        let line_id = line.line_id();
        self.lines.push(line);
        metrics::counter!("cart_mutations_total", "op" => "add").increment(1);
        Ok(line_id)
    }

    /// Adds a single unit of a tea.
    pub fn add_one(&mut self, item: CatalogItem) -> Result<LineId, CartError> {
        self.add_item(item, 1)
    }

    /// Sets a line's quantity. Zero or below removes the line; an unknown
    /// line is left alone.
    pub fn update_quantity(
        &mut self,
        line_id: LineId,
        new_quantity: i64,
    ) -> Result<QuantityChange, CartError> {
        let Some(index) = self.position(line_id) else {
            return Ok(QuantityChange::NotFound);
        };

        if new_quantity <= 0 {
            self.lines.remove(index);
            metrics::counter!("cart_mutations_total", "op" => "remove").increment(1);
            return Ok(QuantityChange::Removed);
        }

        let line = &mut self.lines[index];
        let to = Quantity::new(new_quantity).map_err(|_| CartError::QuantityOverflow {
            tea_id: line.item().id.clone(),
            requested: new_quantity,
            max: u32::MAX,
        })?;
        let from = line.quantity();
        if from == to.get() {
            return Ok(QuantityChange::Unchanged);
        }

        line.set_quantity(to);
        metrics::counter!("cart_mutations_total", "op" => "update").increment(1);
        Ok(QuantityChange::Updated { from, to: to.get() })
    }

    /// Changes a line's quantity by `delta`, as the cart screen's +/- buttons do.
    pub fn adjust_quantity(
        &mut self,
        line_id: LineId,
        delta: i64,
    ) -> Result<QuantityChange, CartError> {
        match self.get(line_id) {
            Some(line) => {
                let target = i64::from(line.quantity()).saturating_add(delta);
                self.update_quantity(line_id, target)
            }
            None => Ok(QuantityChange::NotFound),
        }
    }

    /// Removes a line. Returns false if it was not in the cart.
    pub fn remove_item(&mut self, line_id: LineId) -> bool {
        match self.position(line_id) {
            Some(index) => {
                self.lines.remove(index);
                metrics::counter!("cart_mutations_total", "op" => "remove").increment(1);
                true
            }
            None => false,
        }
    }

    /// Removes every line listed in `line_ids`, ignoring unknown IDs.
    pub fn remove_lines(&mut self, line_ids: &[LineId]) {
        self.lines.retain(|l| !line_ids.contains(&l.line_id()));
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        metrics::counter!("cart_mutations_total", "op" => "clear").increment(1);
    }
}
