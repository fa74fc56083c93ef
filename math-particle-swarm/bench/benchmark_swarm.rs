use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use math_audio_particle_swarm::{Bounds, PSOConfigBuilder, ParticleSwarm};

fn bench_default_run(c: &mut Criterion) {
    let config = PSOConfigBuilder::new()
        .seed(42)
        .build()
        .expect("default config is valid");

    c.bench_function("pso_default_300x100", |b| {
        b.iter(|| {
            let swarm = ParticleSwarm::new(Bounds::default_search_box(), &config)
                .expect("default bounds are valid");
            black_box(swarm.optimize().fun)
        })
    });
}

fn bench_swarm_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso_swarm_size");
    for particles in [10usize, 100, 1000] {
        let config = PSOConfigBuilder::new()
            .particles(particles)
            .iterations(50)
            .seed(7)
            .build()
            .expect("particles >= 1");
        group.bench_with_input(
            BenchmarkId::from_parameter(particles),
            &config,
            |b, config| {
                b.iter(|| {
                    let swarm = ParticleSwarm::new(Bounds::default_search_box(), config)
                        .expect("default bounds are valid");
                    black_box(swarm.optimize().fun)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_default_run, bench_swarm_size);
criterion_main!(benches);
