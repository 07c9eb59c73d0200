// benches/match_pass.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use shopfront::catalog::Product;
use shopfront::filter::{FilterState, match_pass};

fn synthetic_catalog(n: usize) -> Vec<Product> {
    (0..n)
        .map(|i| {
            let tag = match i % 3 {
                0 => "robux",
                1 => "giftcard",
                _ => "gamepass",
            };
            Product::new(
                &format!("Product {i}"),
                "$1.00",
                &[tag],
                &format!("product {i} {tag} synthetic"),
            )
        })
        .collect()
}

fn bench_match_pass(c: &mut Criterion) {
    let products = synthetic_catalog(4096);

    let by_term = FilterState { category: "all".into(), term: "42".into() };
    let by_category = FilterState { category: "giftcard".into(), term: String::new() };
    let combined = FilterState { category: "robux".into(), term: "99".into() };

    c.bench_function("match_pass_term", |b| {
        b.iter(|| match_pass(black_box(&products), black_box(&by_term)).visible_count())
    });

    c.bench_function("match_pass_category", |b| {
        b.iter(|| match_pass(black_box(&products), black_box(&by_category)).visible_count())
    });

    c.bench_function("match_pass_combined", |b| {
        b.iter(|| match_pass(black_box(&products), black_box(&combined)).visible_count())
    });
}

criterion_group!(benches, bench_match_pass);
criterion_main!(benches);
