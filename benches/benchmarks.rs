//! Benchmarks for the reading core

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use paper_diary::{Entry, HeightEstimator, Paginator, Reader};

fn sample_entries(count: usize) -> Vec<Entry> {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 21, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let date = start + Duration::days(i as i64);
            Entry::new(
                format!("entry-{i:04}"),
                "nb1",
                format!("Day {i}"),
                "Walked to the harbour after work and watched the boats come in. "
                    .repeat(1 + i % 7),
                date,
            )
        })
        .collect()
}

fn bench_estimate_height(c: &mut Criterion) {
    c.bench_function("estimate_height", |b| {
        let estimator = HeightEstimator::default();
        let entries = sample_entries(100);
        b.iter(|| {
            for entry in &entries {
                black_box(estimator.estimate(black_box(entry), 16.0));
            }
        });
    });
}

fn bench_paginate_cold(c: &mut Criterion) {
    c.bench_function("paginate_cold_year", |b| {
        let entries = sample_entries(365);
        let mut paginator = Paginator::new();
        b.iter(|| {
            paginator.clear_cache();
            black_box(paginator.calculate_pages(&entries, 800.0, 16.0).unwrap());
        });
    });
}

fn bench_paginate_memoized(c: &mut Criterion) {
    c.bench_function("paginate_memoized_year", |b| {
        let entries = sample_entries(365);
        let mut paginator = Paginator::new();
        paginator.calculate_pages(&entries, 800.0, 16.0).unwrap();
        b.iter(|| {
            black_box(paginator.calculate_pages(&entries, 800.0, 16.0).unwrap());
        });
    });
}

fn bench_navigation_cycle(c: &mut Criterion) {
    c.bench_function("navigation_cycle", |b| {
        let mut reader = Reader::with_entries(sample_entries(365), 800.0, 16.0).unwrap();
        b.iter(|| {
            reader.navigate_next();
            black_box(reader.visible_pages());
            black_box(reader.preload_targets());
            reader.navigate_previous();
        });
    });
}

fn bench_table_of_contents(c: &mut Criterion) {
    c.bench_function("table_of_contents_year", |b| {
        let reader = Reader::with_entries(sample_entries(365), 800.0, 16.0).unwrap();
        b.iter(|| {
            black_box(reader.table_of_contents());
        });
    });
}

criterion_group!(
    benches,
    bench_estimate_height,
    bench_paginate_cold,
    bench_paginate_memoized,
    bench_navigation_cycle,
    bench_table_of_contents,
);

criterion_main!(benches);
