//! Benchmark direction estimation over camera-sized depth grids.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use disha_vision::{DepthMap, DirectionEstimator};

/// Depth grid with a sloped floor and a clear corridor on one side.
fn corridor_map(width: usize, height: usize) -> DepthMap {
    let mut values = Vec::with_capacity(width * height);
    for r in 0..height {
        for c in 0..width {
            let floor = 10.0 + 20.0 * (r as f32 / height as f32);
            let wall = if c < width / 3 { 15.0 } else { 0.0 };
            values.push(floor + wall);
        }
    }
    DepthMap::new(width, height, values).unwrap()
}

fn bench_estimate(c: &mut Criterion) {
    let estimator = DirectionEstimator::new();
    let mut group = c.benchmark_group("direction_estimate");

    for (width, height) in [(64, 48), (160, 120), (320, 240)] {
        let map = corridor_map(width, height);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &map,
            |b, map| b.iter(|| estimator.estimate(black_box(map)).unwrap()),
        );
    }

    group.finish();
}

fn bench_cloud_projection(c: &mut Criterion) {
    let map = corridor_map(320, 240);
    c.bench_function("depth_to_cloud_320x240", |b| {
        b.iter(|| disha_vision::depth_to_cloud(black_box(&map)))
    });
}

criterion_group!(benches, bench_estimate, bench_cloud_projection);
criterion_main!(benches);
