//! Coût d'un pas de simulation et d'un rendu logiciel.
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use fireworks_room::physic_engine::{
    LaunchRequest, PhysicConfig, PhysicEngine, PhysicEngineFireworks,
};
use fireworks_room::renderer_engine::{Renderer, RendererConfig, RendererEngine};

/// Moteur avec `bursts` gerbes fraîchement explosées.
fn engine_with_bursts(bursts: usize) -> PhysicEngineFireworks {
    let mut engine = PhysicEngineFireworks::new(&PhysicConfig {
        seed: Some(1),
        ..PhysicConfig::default()
    });
    for i in 0..bursts {
        let x = 40.0 + (i % 20) as f32 * 45.0;
        let request = LaunchRequest::new(x, 300.0, x, 300.0, None).unwrap();
        engine.launch(&request).unwrap();
    }
    engine.update();
    engine
}

fn bench_physic_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("physic_update");
    for bursts in [1usize, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(bursts), &bursts, |b, &n| {
            b.iter_batched(
                || engine_with_bursts(n),
                |mut engine| black_box(engine.update()),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    let engine = engine_with_bursts(10);
    for dpr in [1.0f32, 2.0] {
        let mut renderer = Renderer::with_seed(&RendererConfig::default(), 1);
        renderer.resize(960.0, 600.0, dpr).unwrap();
        group.bench_with_input(BenchmarkId::new("dpr", dpr), &dpr, |b, _| {
            b.iter(|| black_box(renderer.render_frame(&engine)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_physic_update, bench_render_frame);
criterion_main!(benches);
