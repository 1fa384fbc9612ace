//! Benchmarks for visible-view derivation
//!
//! Run with: cargo bench --package pipeline
//!
//! Measures the cost of recomputing the view from a large snapshot, on both
//! sides of the parallel threshold.

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use people_common::Person;
use pipeline::{Decade, FilterState, derive_visible};

fn build_snapshot(size: usize) -> Vec<Person> {
    (0..size)
        .map(|i| {
            let year = 1960 + (i % 65) as i32;
            let start = NaiveDate::from_ymd_opt(year, 1, 1).expect("valid date");
            Person::new(i as i32, "Given", "Family", start, (i % 10) as i32)
        })
        .collect()
}

fn two_decades_off() -> FilterState {
    let mut state = FilterState::default();
    state.set(Decade::Seventies, false);
    state.set(Decade::TwoThousands, false);
    state
}

fn bench_small_snapshot(c: &mut Criterion) {
    let snapshot = build_snapshot(500);
    let state = two_decades_off();

    c.bench_function("derive_visible_500", |b| {
        b.iter(|| black_box(derive_visible(black_box(&snapshot), black_box(&state))))
    });
}

fn bench_large_snapshot(c: &mut Criterion) {
    let snapshot = build_snapshot(100_000);
    let state = two_decades_off();

    c.bench_function("derive_visible_100k", |b| {
        b.iter(|| black_box(derive_visible(black_box(&snapshot), black_box(&state))))
    });
}

fn bench_all_included(c: &mut Criterion) {
    let snapshot = build_snapshot(100_000);
    let state = FilterState::default();

    c.bench_function("derive_visible_100k_no_filters", |b| {
        b.iter(|| black_box(derive_visible(black_box(&snapshot), black_box(&state))))
    });
}

criterion_group!(
    benches,
    bench_small_snapshot,
    bench_large_snapshot,
    bench_all_included
);
criterion_main!(benches);
