//! Per-category sales totals.

use std::collections::{HashMap, HashSet};

use common::TeaId;
use domain::{Category, Money};
use serde::Serialize;

use crate::query::DateRange;
use crate::sale::SaleRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySales {
    pub category: Category,
    pub total_sales: Money,
    pub total_quantity: u64,
    pub tea_count: usize,
}

/// Groups sales in `range` by category, highest revenue first.
///
/// Ties are broken by category name so the order is stable.
pub fn build(sales: &[SaleRecord], range: DateRange) -> Vec<CategorySales> {
    let mut totals: HashMap<Category, (Money, u64, HashSet<&TeaId>)> = HashMap::new();

    for sale in sales.iter().filter(|s| range.contains(s.date())) {
        let entry = totals.entry(sale.category).or_default();
        entry.0 += sale.total_amount;
        entry.1 += u64::from(sale.quantity);
        entry.2.insert(&sale.tea_id);
    }

    let mut rows: Vec<CategorySales> = totals
        .into_iter()
        .map(|(category, (total_sales, total_quantity, teas))| CategorySales {
            category,
            total_sales,
            total_quantity,
            tea_count: teas.len(),
        })
        .collect();
    rows.sort_by(|a, b| {
        b.total_sales
            .cmp(&a.total_sales)
            .then_with(|| a.category.as_str().cmp(b.category.as_str()))
    });
    rows
}
