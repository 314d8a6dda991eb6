//! Benchmarks for radius search and seed parsing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use terminals_core::seed::parse_seed;
use terminals_core::{radius_search, TerminalRecord};
use terminals_geo::Coordinate;

fn create_records(count: usize) -> Vec<TerminalRecord> {
    (0..count)
        .map(|i| {
            // Spread over western Europe
            let lat = 40.0 + (i as f64 * 0.037) % 15.0;
            let lng = -5.0 + (i as f64 * 0.053) % 20.0;
            TerminalRecord::new(format!("Terminal {i:05}"), Coordinate::new(lat, lng))
        })
        .collect()
}

fn bench_radius_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("radius_search");
    let paris = Coordinate::new(48.8566, 2.3522);

    for size in [100, 1_000, 10_000, 100_000].iter() {
        let records = create_records(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| radius_search(black_box(records), black_box(&paris), 100_000.0))
        });
    }

    group.finish();
}

fn bench_parse_seed(c: &mut Criterion) {
    let entries: Vec<String> = (0..1_000)
        .map(|i| {
            format!(
                r#"{{"terminalName":"T{i}","city":"C{}","pinType":"CivilianAirport","gmtOffset":1,"elevation":{i},"location":{{"type":"Point","coordinates":[{},{}]}}}}"#,
                i % 50,
                -5.0 + (i as f64) * 0.01,
                45.0 + (i as f64) * 0.005
            )
        })
        .collect();
    let json = format!(r#"{{"terminals":[{}]}}"#, entries.join(","));

    c.bench_function("parse_seed_1000", |b| b.iter(|| parse_seed(black_box(&json))));
}

criterion_group!(benches, bench_radius_search, bench_parse_seed);
criterion_main!(benches);
