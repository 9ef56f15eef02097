//! Period summary with best-selling teas.

use std::collections::HashMap;

use common::TeaId;
use domain::{Category, Money};
use serde::Serialize;

use crate::query::DateRange;
use crate::sale::SaleRecord;

/// Number of teas listed in [`SalesSummary::top_teas`].
pub const TOP_TEAS_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopTea {
    pub name: String,
    pub category: Category,
    pub total_sold: u64,
    pub total_revenue: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesSummary {
    pub total_amount: Money,
    pub total_quantity: u64,
    pub total_transactions: usize,
    /// Teas with the most units sold, best first.
    pub top_teas: Vec<TopTea>,
}

pub fn build(sales: &[SaleRecord], range: DateRange) -> SalesSummary {
    let mut total_amount = Money::zero();
    let mut total_quantity = 0u64;
    let mut total_transactions = 0usize;
    let mut by_tea: HashMap<&TeaId, TopTea> = HashMap::new();

    for sale in sales.iter().filter(|s| range.contains(s.date())) {
        total_amount += sale.total_amount;
        total_quantity += u64::from(sale.quantity);
        total_transactions += 1;

        let tea = by_tea.entry(&sale.tea_id).or_insert_with(|| TopTea {
            name: sale.tea_name.clone(),
            category: sale.category,
            total_sold: 0,
            total_revenue: Money::zero(),
        });
        tea.total_sold += u64::from(sale.quantity);
        tea.total_revenue += sale.total_amount;
    }

    let mut top_teas: Vec<TopTea> = by_tea.into_values().collect();
    top_teas.sort_by(|a, b| {
        b.total_sold
            .cmp(&a.total_sold)
            .then_with(|| b.total_revenue.cmp(&a.total_revenue))
            .then_with(|| a.name.cmp(&b.name))
    });
    top_teas.truncate(TOP_TEAS_LIMIT);

    SalesSummary {
        total_amount,
        total_quantity,
        total_transactions,
        top_teas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sale::NewSale;
    use chrono::{NaiveDate, TimeZone, Utc};
    use common::SaleId;
    use domain::CatalogItem;

    fn item(id: &str, rupees: i64) -> CatalogItem {
        CatalogItem::new(id, format!("Tea {id}"), Category::Black, Money::from_rupees(rupees))
            .unwrap()
    }

    fn sale(id: u64, item: &CatalogItem, qty: u32) -> SaleRecord {
        let at = Utc.with_ymd_and_hms(2024, 5, 20, 10, 0, 0).unwrap();
        SaleRecord::from_new(SaleId::new(id), NewSale::of(item, qty).sold_at(at))
    }

    fn range() -> DateRange {
        DateRange::ending_on(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap())
    }

    #[test]
    fn test_totals_and_ranking() {
        let a = item("a", 250);
        let b = item("b", 80);
        let sales = vec![sale(1, &a, 2), sale(2, &b, 3), sale(3, &a, 2)];

        let summary = build(&sales, range());

        assert_eq!(summary.total_transactions, 3);
        assert_eq!(summary.total_quantity, 7);
        assert_eq!(summary.total_amount, Money::from_rupees(1240));
        assert_eq!(summary.top_teas[0].name, "Tea a");
        assert_eq!(summary.top_teas[0].total_sold, 4);
        assert_eq!(summary.top_teas[0].total_revenue, Money::from_rupees(1000));
        assert_eq!(summary.top_teas[1].name, "Tea b");
    }

    #[test]
    fn test_top_teas_capped_at_ten() {
        let sales: Vec<_> = (0..15u32)
            .map(|i| sale(u64::from(i) + 1, &item(&format!("t{i:02}"), 10), i + 1))
            .collect();

        let summary = build(&sales, range());

        assert_eq!(summary.top_teas.len(), TOP_TEAS_LIMIT);
        assert_eq!(summary.top_teas[0].total_sold, 15);
        assert_eq!(summary.top_teas[9].total_sold, 6);
    }

    #[test]
    fn test_empty_range() {
        let summary = build(&[], range());
        assert_eq!(summary.total_transactions, 0);
        assert!(summary.total_amount.is_zero());
        assert!(summary.top_teas.is_empty());
    }
}
