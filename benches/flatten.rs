// benches/flatten.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use sic_scrape::{sic, specs::major};

fn load_sample() -> &'static str {
    include_str!("../tests/fixtures/major_group_01.html")
}

fn bench_major(c: &mut Criterion) {
    let doc = load_sample();
    let tree = major::parse(doc).expect("parse fixture");

    c.bench_function("major_parse", |b| {
        b.iter(|| {
            let tree = major::parse(black_box(doc)).unwrap();
            black_box(tree.children.len())
        })
    });

    c.bench_function("flatten", |b| {
        b.iter(|| {
            let recs = sic::flatten(black_box(&tree));
            black_box(recs.len())
        })
    });
}

criterion_group!(benches, bench_major);
criterion_main!(benches);
