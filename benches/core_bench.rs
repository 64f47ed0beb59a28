use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use screen_measure::SegmentStore;
use std::hint::black_box;

/// Strahlenfächer um einen gemeinsamen Mittelpunkt: jedes Paar teilt
/// genau einen Endpunkt — der teuerste Fall für die Schnittwinkel-Passe.
fn build_fan_store(segment_count: usize) -> SegmentStore {
    let mut store = SegmentStore::new();
    let hub = Vec2::new(960.0, 540.0);

    for index in 0..segment_count {
        let angle = index as f32 * 0.37;
        let end = hub + Vec2::new(angle.cos(), angle.sin()) * (100.0 + index as f32);
        store.add(hub, end);
    }

    store
}

/// Verstreute Strecken ohne gemeinsame Endpunkte.
fn build_scattered_store(segment_count: usize) -> SegmentStore {
    let mut store = SegmentStore::new();

    for index in 0..segment_count {
        let column = (index % 32) as f32;
        let row = (index / 32) as f32;
        let start = Vec2::new(column * 60.0, row * 60.0);
        store.add(start, start + Vec2::new(40.0, 25.0));
    }

    store
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 13) % 1920) as f32 + 0.37;
            let y = ((i * 7) % 1080) as f32 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_intersection_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersection_recompute");

    for &segment_count in &[16usize, 64usize, 256usize] {
        let mut fan = build_fan_store(segment_count);

        group.bench_with_input(
            BenchmarkId::new("fan", segment_count),
            &segment_count,
            |b, _| {
                b.iter(|| {
                    fan.recompute_intersections();
                    black_box(fan.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_vertex_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_queries");
    let query_points = build_query_points(1024);

    for &segment_count in &[64usize, 256usize] {
        let store = build_scattered_store(segment_count);

        group.bench_with_input(
            BenchmarkId::new("nearest_batch", segment_count),
            &store,
            |b, store| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if store
                            .vertex_index()
                            .nearest_within(black_box(*point), 15.0)
                            .is_some()
                        {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_intersection_recompute, bench_vertex_queries);
criterion_main!(benches);
