//! Criterion benchmarks for the plate-appearance pipeline.

use bb_core::engine::config::ModelConfig;
use bb_core::engine::pitch::PitchEngine;
use bb_core::engine::ratings::{BatterRatings, PitcherRatings};
use bb_core::{simulate_seeded, GameSimulator, Lineup, SeededRng};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_single_at_bat(c: &mut Criterion) {
    let config = ModelConfig::default();
    let engine = PitchEngine::new(&config.pitch);
    let pitcher = PitcherRatings::average();
    let batter = BatterRatings::average();
    let mut rng = SeededRng::new(42);

    c.bench_function("at_bat", |b| {
        b.iter(|| {
            let result = engine.simulate(&pitcher, &batter, &mut rng);
            black_box(&result);
        });
    });
}

fn bench_full_game(c: &mut Criterion) {
    let simulator = GameSimulator::new(ModelConfig::default()).unwrap();
    let home = Lineup::average("Home");
    let away = Lineup::average("Away");
    let mut seed = 0u64;

    c.bench_function("full_game", |b| {
        b.iter(|| {
            seed += 1;
            let mut rng = SeededRng::new(seed);
            let record = simulator.play(&home, &away, &mut rng).unwrap();
            black_box(&record);
        });
    });
}

fn bench_100_seeded_games(c: &mut Criterion) {
    c.bench_function("100_seeded_games", |b| {
        b.iter(|| {
            for seed in 0..100 {
                let record = simulate_seeded(ModelConfig::default(), seed).unwrap();
                black_box(record.digest().unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_single_at_bat, bench_full_game, bench_100_seeded_games);
criterion_main!(benches);
