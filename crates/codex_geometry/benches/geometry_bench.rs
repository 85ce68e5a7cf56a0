use criterion::{Criterion, black_box, criterion_group, criterion_main};
use codex_geometry::{AppMode, GeometryConfig, build_scene, calculate_nodes, ray_circle_roots};
use codex_profile::{BearingAngles, OnboardingInput, derive_profile};

fn intersection_bench(c: &mut Criterion) {
    let bearings = BearingAngles::derive(21, 6, 8);
    let cfg = GeometryConfig::default();

    let mut group = c.benchmark_group("intersection");
    group.bench_function("ray_circle_roots", |b| {
        b.iter(|| ray_circle_roots(black_box(278.0), black_box(315.0), 220.0, 220.0))
    });
    group.bench_function("calculate_nodes", |b| {
        b.iter(|| calculate_nodes(black_box(&bearings), black_box(0.61), &cfg))
    });
    group.finish();
}

fn scene_bench(c: &mut Criterion) {
    let profile = derive_profile(&OnboardingInput::new("Ann Lee", "1990-05-15", "08:30"));
    let cfg = GeometryConfig::default();
    c.bench_function("build_scene", |b| {
        b.iter(|| build_scene(black_box(&profile), AppMode::Aura, &cfg))
    });
}

criterion_group!(benches, intersection_bench, scene_bench);
criterion_main!(benches);
