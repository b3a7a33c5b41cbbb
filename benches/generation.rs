//! Benchmarks for the Chroma Life generation transition.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use chroma_life::{BlendMode, Pattern, Seed, SimulationConfig};

fn bench_next_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_round");

    for size in [64, 128, 256, 512] {
        let config = SimulationConfig {
            width: size,
            height: size,
            blend_mode: BlendMode::Vibrant,
        };

        let seed = Seed {
            pattern: Pattern::Random,
            rng_seed: Some(42),
        };
        let field = seed.generate(&config);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| black_box(&field).next_round());
            },
        );
    }

    group.finish();
}

fn bench_blend_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("blend_mode");

    for mode in [BlendMode::Vibrant, BlendMode::Average] {
        let config = SimulationConfig {
            width: 256,
            height: 256,
            blend_mode: mode,
        };

        let seed = Seed {
            pattern: Pattern::Random,
            rng_seed: Some(42),
        };
        let field = seed.generate(&config);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", mode)),
            &mode,
            |b, _| {
                b.iter(|| black_box(&field).next_round());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_next_round, bench_blend_modes);
criterion_main!(benches);
