use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{CatalogItem, Category, Money};
use reports::{DateRange, NewSale, SalesLedger};

/// Populate a ledger with `n` sales spread over 60 days and 20 teas.
async fn populate_ledger(ledger: &SalesLedger, n: usize) {
    let start = Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap();
    let items: Vec<_> = (0..20)
        .map(|i| {
            CatalogItem::new(
                format!("tea-{i}"),
                format!("Bench Tea {i}"),
                Category::ALL[i % Category::ALL.len()],
                Money::from_cents(5000 + i as i64 * 125),
            )
            .unwrap()
        })
        .collect();

    for i in 0..n {
        let item = &items[i % items.len()];
        let sold_at = start + Duration::hours((i % (60 * 24)) as i64);
        let sale = NewSale::of(item, (i % 5) as u32 + 1).sold_at(sold_at);
        ledger.append(sale).await;
    }
}

fn bench_reports_10k_sales(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let ledger = SalesLedger::new();
    rt.block_on(populate_ledger(&ledger, 10_000));

    let range = DateRange::ending_on(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap());

    c.bench_function("reports/daily_10k", |b| {
        b.iter(|| rt.block_on(ledger.daily_sales(range)));
    });
    c.bench_function("reports/category_10k", |b| {
        b.iter(|| rt.block_on(ledger.category_sales(range)));
    });
    c.bench_function("reports/summary_10k", |b| {
        b.iter(|| rt.block_on(ledger.summary(range)));
    });
}

criterion_group!(benches, bench_reports_10k_sales);
criterion_main!(benches);
