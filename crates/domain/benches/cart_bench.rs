use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Cart, CatalogItem, Category, Money, SharedCart};

fn catalog(n: usize) -> Vec<CatalogItem> {
    (0..n)
        .map(|i| {
            CatalogItem::new(
                format!("tea-{i}"),
                format!("Bench Tea {i}"),
                Category::ALL[i % Category::ALL.len()],
                Money::from_cents(1000 + i as i64),
            )
            .unwrap()
        })
        .collect()
}

fn bench_add_items(c: &mut Criterion) {
    let items = catalog(50);

    c.bench_function("cart/add_50_distinct", |b| {
        b.iter(|| {
            let mut cart = Cart::new();
            for item in &items {
                cart.add_item(item.clone(), 2).unwrap();
            }
            cart
        });
    });

    c.bench_function("cart/add_same_item_100x", |b| {
        b.iter(|| {
            let mut cart = Cart::new();
            for _ in 0..100 {
                cart.add_one(items[0].clone()).unwrap();
            }
            cart
        });
    });
}

fn bench_totals(c: &mut Criterion) {
    let mut cart = Cart::new();
    for item in catalog(50) {
        cart.add_item(item, 3).unwrap();
    }

    c.bench_function("cart/total_50_lines", |b| b.iter(|| cart.total()));
    c.bench_function("cart/snapshot_50_lines", |b| b.iter(|| cart.snapshot()));
}

fn bench_shared_cart(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let shared = SharedCart::new();
    let items = catalog(10);

    c.bench_function("cart/shared_add_and_snapshot", |b| {
        b.iter(|| {
            rt.block_on(async {
                for item in &items {
                    shared.with(|cart| cart.add_one(item.clone())).await.unwrap();
                }
                shared.snapshot().await
            })
        });
    });
}

criterion_group!(benches, bench_add_items, bench_totals, bench_shared_cart);
criterion_main!(benches);
