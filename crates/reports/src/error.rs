//! Report error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur when building a report query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Start date falls after end date.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Date string is not `YYYY-MM-DD`.
    #[error("Invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// Report type is not one of daily, category or summary.
    #[error("Invalid report type {0:?}. Use: daily, category, or summary")]
    UnknownReportType(String),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
