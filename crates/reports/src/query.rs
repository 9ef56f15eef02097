//! Report query parameters.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Number of days covered when a query gives no start date.
pub const DEFAULT_WINDOW_DAYS: u64 = 30;

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting a start after the end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ReportError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A single day.
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// The default window: the 30 days leading up to and including `end`.
    pub fn ending_on(end: NaiveDate) -> Self {
        let start = end.checked_sub_days(Days::new(DEFAULT_WINDOW_DAYS)).unwrap_or(end);
        Self { start, end }
    }

    /// Builds a range from optional bounds.
    ///
    /// A missing end defaults to `today`; a missing start defaults to 30 days
    /// before the end.
    pub fn resolve(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self> {
        let end = end.unwrap_or(today);
        match start {
            Some(start) => Self::new(start, end),
            None => Ok(Self::ending_on(end)),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ReportError::InvalidDate(input.to_string()))
}

/// Which report to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    #[default]
    Daily,
    Category,
    Summary,
}

impl ReportKind {
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(ReportKind::Daily),
            "category" => Ok(ReportKind::Category),
            "summary" => Ok(ReportKind::Summary),
            _ => Err(ReportError::UnknownReportType(input.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Daily => "daily_sales",
            ReportKind::Category => "category_sales",
            ReportKind::Summary => "summary",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        let err = DateRange::new(date("2024-05-02"), date("2024-05-01")).unwrap_err();
        assert!(matches!(err, ReportError::InvalidRange { .. }));
    }

    #[test]
    fn test_resolve_defaults() {
        let today = date("2024-05-31");
        let range = DateRange::resolve(None, None, today).unwrap();
        assert_eq!(range.end, today);
        assert_eq!(range.start, date("2024-05-01"));

        let range = DateRange::resolve(None, Some(date("2024-03-10")), today).unwrap();
        assert_eq!(range.start, date("2024-02-09"));

        let range = DateRange::resolve(Some(date("2024-05-30")), None, today).unwrap();
        assert_eq!(range, DateRange::new(date("2024-05-30"), today).unwrap());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::new(date("2024-05-01"), date("2024-05-03")).unwrap();
        assert!(range.contains(date("2024-05-01")));
        assert!(range.contains(date("2024-05-03")));
        assert!(!range.contains(date("2024-05-04")));
        assert!(DateRange::day(date("2024-05-01")).contains(date("2024-05-01")));
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        assert!(matches!(
            parse_date("01/05/2024"),
            Err(ReportError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_report_kind_parse() {
        assert_eq!(ReportKind::parse("daily").unwrap(), ReportKind::Daily);
        assert_eq!(ReportKind::parse("Category").unwrap(), ReportKind::Category);
        assert_eq!(ReportKind::parse("summary").unwrap(), ReportKind::Summary);
        assert_eq!(
            ReportKind::parse("weekly"),
            Err(ReportError::UnknownReportType("weekly".to_string()))
        );
    }
}
