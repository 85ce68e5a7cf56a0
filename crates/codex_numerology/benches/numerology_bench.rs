use criterion::{Criterion, black_box, criterion_group, criterion_main};
use codex_numerology::{calculate_destiny, calculate_life_path, reduce_keeping_masters};

fn numerology_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("numerology");
    group.bench_function("life_path", |b| {
        b.iter(|| calculate_life_path(black_box("1982-07-31")))
    });
    group.bench_function("destiny", |b| {
        b.iter(|| calculate_destiny(black_box("Alan Mathison Turing")))
    });
    group.bench_function("reduce_keeping_masters", |b| {
        b.iter(|| reduce_keeping_masters(black_box(987_654)))
    });
    group.finish();
}

criterion_group!(benches, numerology_bench);
criterion_main!(benches);
