//! Sales ledger and the read-only reports built from it.
//!
//! - [`SalesLedger`] stores every recorded sale
//! - [`DateRange`] and [`ReportKind`] describe a report query
//! - [`views`] computes daily, per-category, summary and dashboard figures

pub mod error;
pub mod ledger;
pub mod query;
pub mod sale;
pub mod views;

pub use error::{ReportError, Result};
pub use ledger::SalesLedger;
pub use query::{DEFAULT_WINDOW_DAYS, DateRange, ReportKind, parse_date};
pub use sale::{NewSale, SaleRecord};
pub use views::{
    CategorySales, DailySales, DashboardStats, PeriodStats, SalesSummary, TOP_TEAS_LIMIT, TopTea,
};
