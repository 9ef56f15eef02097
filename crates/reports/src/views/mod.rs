//! Report views computed from the ledger's sales.

pub mod category;
pub mod daily;
pub mod dashboard;
pub mod summary;

pub use category::CategorySales;
pub use daily::DailySales;
pub use dashboard::{DashboardStats, PeriodStats};
pub use summary::{SalesSummary, TOP_TEAS_LIMIT, TopTea};
