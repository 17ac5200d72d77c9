use std::time::Duration;

use boid_sim::FlockConfig;
use boid_steer::FlockSteering;
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let samples: usize = std::env::var("BOID_BENCH_SAMPLES")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(20);
    let frames: usize = std::env::var("BOID_BENCH_FRAMES")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(16);
    let agents_list: Vec<usize> = std::env::var("BOID_BENCH_AGENTS")
        .ok()
        .map(|s| {
            s.split(',')
                .filter_map(|t| t.trim().parse::<usize>().ok())
                .collect::<Vec<_>>()
        })
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| vec![1_000_usize, 5_000, 20_000]);
    group.sample_size(samples);
    group.measurement_time(Duration::from_secs(10));

    for &agents in &agents_list {
        group.bench_function(format!("frames{frames}_agents{agents}"), |b| {
            b.iter_batched(
                || {
                    let mut config = FlockConfig::uniform(16, agents);
                    config.sim.seed = 0xB01D;
                    config.sphere.radius = 30.0;
                    config.spawn.group_radius = 5.0;
                    config.build_sim(FlockSteering).expect("bench config is valid")
                },
                |mut sim| {
                    for _ in 0..frames {
                        sim.step(1.0 / 60.0).expect("frame");
                    }
                    sim
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_frames);
criterion_main!(benches);
