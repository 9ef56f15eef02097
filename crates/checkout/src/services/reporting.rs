//! Reporting service trait, served from the sales ledger.

use async_trait::async_trait;
use chrono::NaiveDate;
use reports::{CategorySales, DailySales, DashboardStats, DateRange, SalesLedger, SalesSummary};

use crate::error::ServiceResult;

/// Read-only sales reports.
#[async_trait]
pub trait ReportingProvider: Send + Sync {
    async fn daily_sales(&self, range: DateRange) -> ServiceResult<Vec<DailySales>>;

    async fn category_sales(&self, range: DateRange) -> ServiceResult<Vec<CategorySales>>;

    async fn summary(&self, range: DateRange) -> ServiceResult<SalesSummary>;

    async fn dashboard(&self, today: NaiveDate) -> ServiceResult<DashboardStats>;
}

#[async_trait]
impl ReportingProvider for SalesLedger {
    #[tracing::instrument(skip(self))]
    async fn daily_sales(&self, range: DateRange) -> ServiceResult<Vec<DailySales>> {
        Ok(SalesLedger::daily_sales(self, range).await)
    }

    #[tracing::instrument(skip(self))]
    async fn category_sales(&self, range: DateRange) -> ServiceResult<Vec<CategorySales>> {
        Ok(SalesLedger::category_sales(self, range).await)
    }

    #[tracing::instrument(skip(self))]
    async fn summary(&self, range: DateRange) -> ServiceResult<SalesSummary> {
        Ok(SalesLedger::summary(self, range).await)
    }

    #[tracing::instrument(skip(self))]
    async fn dashboard(&self, today: NaiveDate) -> ServiceResult<DashboardStats> {
        Ok(SalesLedger::dashboard(self, today).await)
    }
}
