//! Integration tests: sales appended to the ledger → every report view.

use chrono::{NaiveDate, TimeZone, Utc};
use domain::{CatalogItem, Category, Money};
use reports::{DateRange, NewSale, ReportError, SalesLedger};

fn dimbula() -> CatalogItem {
    CatalogItem::new("dimbula", "Dimbula BOP", Category::Black, Money::from_rupees(250)).unwrap()
}

fn jasmine() -> CatalogItem {
    CatalogItem::new(
        "jasmine",
        "Jasmine Pearls",
        Category::Green,
        Money::parse("80.50").unwrap(),
    )
    .unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Three days of trading in May 2024 plus one sale in April.
async fn seeded_ledger() -> SalesLedger {
    let ledger = SalesLedger::new();
    let at = |m, d, h| Utc.with_ymd_and_hms(2024, m, d, h, 0, 0).unwrap();

    ledger.append(NewSale::of(&dimbula(), 4).sold_at(at(4, 28, 10))).await;
    ledger.append(NewSale::of(&dimbula(), 2).sold_at(at(5, 2, 9))).await;
    ledger.append(NewSale::of(&jasmine(), 3).sold_at(at(5, 2, 11))).await;
    ledger.append(NewSale::of(&jasmine(), 1).sold_at(at(5, 20, 16)).sold_by("kamala")).await;
    ledger
}

#[tokio::test]
async fn test_checkout_day_totals_match_cart_total() {
    let ledger = seeded_ledger().await;

    let days = ledger.daily_sales(DateRange::day(date(2024, 5, 2))).await;

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].total_sales, Money::parse("741.50").unwrap());
    assert_eq!(days[0].total_quantity, 5);
    assert_eq!(days[0].tea_count, 2);
}

#[tokio::test]
async fn test_default_window_reports() {
    let ledger = seeded_ledger().await;
    let range = DateRange::resolve(None, None, date(2024, 5, 20)).unwrap();

    let daily = ledger.daily_sales(range).await;
    let dates: Vec<_> = daily.iter().map(|d| d.date).collect();
    assert_eq!(dates, vec![date(2024, 4, 28), date(2024, 5, 2), date(2024, 5, 20)]);

    let categories = ledger.category_sales(range).await;
    assert_eq!(categories[0].category, Category::Black);
    assert_eq!(categories[0].total_sales, Money::from_rupees(1500));
    assert_eq!(categories[1].category, Category::Green);
    assert_eq!(categories[1].total_quantity, 4);

    let summary = ledger.summary(range).await;
    assert_eq!(summary.total_transactions, 4);
    assert_eq!(summary.total_quantity, 10);
    assert_eq!(summary.top_teas[0].name, "Dimbula BOP");
    assert_eq!(summary.top_teas[0].total_sold, 6);
}

#[tokio::test]
async fn test_dashboard() {
    let ledger = seeded_ledger().await;

    let stats = ledger.dashboard(date(2024, 5, 20)).await;

    assert_eq!(stats.today.sales_count, 1);
    assert_eq!(stats.today.revenue, Money::parse("80.50").unwrap());
    assert_eq!(stats.this_month.sales_count, 3);
    assert_eq!(stats.this_month.quantity_sold, 6);
}

#[tokio::test]
async fn test_inverted_range_is_rejected() {
    let err = DateRange::resolve(Some(date(2024, 5, 20)), Some(date(2024, 5, 1)), date(2024, 5, 20))
        .unwrap_err();
    assert!(matches!(err, ReportError::InvalidRange { .. }));
}
