//! Benchmarks for distance and viewport calculations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;
use terminals_geo::{fit_viewport, haversine_distance_meters, parse_geojson_point, Coordinate};

fn create_test_points(count: usize) -> Vec<Coordinate> {
    (0..count)
        .map(|i| {
            // Points in a grid around the New York airports
            let lat = 40.0 + (i as f64 * 0.01) % 2.0;
            let lng = -74.5 + (i as f64 * 0.01) % 2.0;
            Coordinate::new(lat, lng)
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let jfk = Coordinate::new(40.6413, -73.7781);
    let lhr = Coordinate::new(51.4700, -0.4543);

    c.bench_function("haversine_single", |b| {
        b.iter(|| haversine_distance_meters(black_box(&jfk), black_box(&lhr)))
    });
}

fn bench_fit_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_viewport");

    for size in [1, 10, 100, 1000, 10000].iter() {
        let points = create_test_points(*size);

        group.bench_with_input(BenchmarkId::new("points", size), size, |b, _| {
            b.iter(|| fit_viewport(black_box(&points).iter().copied()))
        });
    }

    group.finish();
}

fn bench_geojson_parsing(c: &mut Criterion) {
    let point = json!({"type": "Point", "coordinates": [-73.7781, 40.6413]});

    c.bench_function("geojson_point", |b| {
        b.iter(|| parse_geojson_point(black_box(&point)))
    });
}

criterion_group!(
    benches,
    bench_single_distance,
    bench_fit_viewport,
    bench_geojson_parsing
);
criterion_main!(benches);
