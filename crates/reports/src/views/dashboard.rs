//! Today and month-to-date figures for the dashboard.

use chrono::{Datelike, NaiveDate};
use domain::Money;
use serde::Serialize;

use crate::query::DateRange;
use crate::sale::SaleRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeriodStats {
    pub sales_count: usize,
    pub revenue: Money,
    pub quantity_sold: u64,
}

impl PeriodStats {
    fn record(&mut self, sale: &SaleRecord) {
        self.sales_count += 1;
        self.revenue += sale.total_amount;
        self.quantity_sold += u64::from(sale.quantity);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub today: PeriodStats,
    pub this_month: PeriodStats,
}

pub fn build(sales: &[SaleRecord], today: NaiveDate) -> DashboardStats {
    let month_start = today.with_day(1).unwrap_or(today);
    let month = DateRange {
        start: month_start,
        end: today,
    };

    let mut stats = DashboardStats::default();
    for sale in sales {
        let date = sale.date();
        if date == today {
            stats.today.record(sale);
        }
        if month.contains(date) {
            stats.this_month.record(sale);
        }
    }
    stats
}
