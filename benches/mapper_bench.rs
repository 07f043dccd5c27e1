//! Benchmarks for the per-frame scroll mapping and typewriter steps.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phone_showcase::engine::ShowcaseEngine;
use phone_showcase::options::Options;
use phone_showcase::scroll::{derive_visual_state, ScrollProgress};
use phone_showcase::typewriter::{TypewriterRunner, TypewriterScript};

fn mapper_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_visual_state");
    for p in [0.1_f32, 0.45, 0.65] {
        let progress = ScrollProgress::new(p);
        group.bench_function(format!("progress_{p}"), |b| {
            b.iter(|| black_box(derive_visual_state(black_box(progress))))
        });
    }
    group.finish();
}

fn engine_frame_benchmark(c: &mut Criterion) {
    let mut engine = ShowcaseEngine::new(&Options::default(), 1920.0, 1080.0);
    let handle = engine.progress_handle();
    let mut p = 0.0_f32;
    c.bench_function("engine_frame", |b| {
        b.iter(|| {
            p = (p + 0.001) % 1.0;
            handle.store(ScrollProgress::new(p));
            black_box(engine.frame())
        })
    });
}

fn typewriter_benchmark(c: &mut Criterion) {
    let script =
        TypewriterScript::from_options(&Options::default().typewriter)
            .expect("default texts are non-empty");
    let mut runner = TypewriterRunner::new(script);
    c.bench_function("typewriter_fire", |b| {
        b.iter(|| black_box(runner.fire()))
    });
}

criterion_group!(
    benches,
    mapper_benchmark,
    engine_frame_benchmark,
    typewriter_benchmark
);
criterion_main!(benches);
