use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use perspective_guides::app::build_render_scene;
use perspective_guides::core::{distance_to_segment, fan_segments};
use perspective_guides::{AppState, GridConfig, LineStyle};
use std::hint::black_box;

fn bench_fan_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_segments");

    for &density in &[18u32, 96u32] {
        group.bench_with_input(BenchmarkId::from_parameter(density), &density, |b, &d| {
            b.iter(|| {
                let segments = fan_segments(
                    black_box(Vec2::new(450.0, 200.0)),
                    d,
                    black_box(Vec2::new(900.0, 600.0)),
                );
                black_box(segments.len())
            })
        });
    }

    group.finish();
}

fn build_query_points(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let x = (i % 900) as f32 + 0.37;
            let y = ((i * 7) % 600) as f32 + 0.63;
            Vec2::new(x, y)
        })
        .collect()
}

fn bench_distance_to_segment(c: &mut Criterion) {
    let query_points = build_query_points(1024);
    let start = Vec2::new(10.0, 20.0);
    let end = Vec2::new(870.0, 540.0);

    c.bench_function("distance_to_segment_batch", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for point in &query_points {
                if distance_to_segment(black_box(*point), start, end) < 20.0 {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

fn build_full_session() -> AppState {
    let mut state = AppState::new();
    for i in 0..3 {
        let point = Vec2::new(150.0 + 300.0 * i as f32, 100.0 + 150.0 * i as f32);
        state
            .guides
            .create_grid(GridConfig {
                density: Some(48),
                ..GridConfig::at(point)
            })
            .expect("Raster erwartet");
    }
    for i in 0..200 {
        let y = (i * 3) as f32;
        state.guides.create_line_guide(
            Vec2::new(0.0, y),
            Vec2::new(900.0, 600.0 - y),
            LineStyle::default(),
        );
    }
    state
}

fn bench_render_scene(c: &mut Criterion) {
    let state = build_full_session();

    c.bench_function("render_scene_full_session", |b| {
        b.iter(|| {
            let scene = build_render_scene(black_box(&state));
            black_box(scene.primitives.len())
        })
    });
}

criterion_group!(
    benches,
    bench_fan_segments,
    bench_distance_to_segment,
    bench_render_scene
);
criterion_main!(benches);
