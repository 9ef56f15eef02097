//! Per-day sales totals.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use common::TeaId;
use domain::Money;
use serde::Serialize;

use crate::query::DateRange;
use crate::sale::SaleRecord;

/// Totals for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySales {
    pub date: NaiveDate,
    pub total_sales: Money,
    pub total_quantity: u64,
    /// Number of distinct teas sold that day.
    pub tea_count: usize,
}

#[derive(Default)]
struct DayAccumulator<'a> {
    total_sales: Money,
    total_quantity: u64,
    teas: HashSet<&'a TeaId>,
}

/// Groups sales in `range` by day, oldest first. Days without sales are omitted.
pub fn build(sales: &[SaleRecord], range: DateRange) -> Vec<DailySales> {
    let mut days: BTreeMap<NaiveDate, DayAccumulator<'_>> = BTreeMap::new();

    for sale in sales.iter().filter(|s| range.contains(s.date())) {
        let day = days.entry(sale.date()).or_default();
        day.total_sales += sale.total_amount;
        day.total_quantity += u64::from(sale.quantity);
        day.teas.insert(&sale.tea_id);
    }

    days.into_iter()
        .map(|(date, day)| DailySales {
            date,
            total_sales: day.total_sales,
            total_quantity: day.total_quantity,
            tea_count: day.teas.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sale::NewSale;
    use chrono::{TimeZone, Utc};
    use common::SaleId;
    use domain::{CatalogItem, Category};

    fn sale(id: u64, tea: &str, qty: u32, day: u32) -> SaleRecord {
        let item =
            CatalogItem::new(tea, tea, Category::Green, Money::from_rupees(100)).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap();
        SaleRecord::from_new(SaleId::new(id), NewSale::of(&item, qty).sold_at(at))
    }

    fn may(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test]
    fn test_groups_by_day_in_ascending_order() {
        let sales = vec![
            sale(1, "a", 1, 3),
            sale(2, "b", 2, 1),
            sale(3, "a", 3, 3),
            sale(4, "c", 1, 3),
        ];
        let range = DateRange::new(may(1), may(31)).unwrap();

        let days = build(&sales, range);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, may(1));
        assert_eq!(days[0].total_quantity, 2);
        assert_eq!(days[0].tea_count, 1);
        assert_eq!(days[1].date, may(3));
        assert_eq!(days[1].total_quantity, 5);
        assert_eq!(days[1].total_sales, Money::from_rupees(500));
        assert_eq!(days[1].tea_count, 2);
    }

    #[test]
    fn test_excludes_days_outside_range() {
        let sales = vec![sale(1, "a", 1, 1), sale(2, "a", 1, 5)];
        let days = build(&sales, DateRange::new(may(2), may(5)).unwrap());

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, may(5));
    }

    #[test]
    fn test_empty_ledger() {
        assert!(build(&[], DateRange::day(may(1))).is_empty());
    }
}
