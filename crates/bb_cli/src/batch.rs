//! Parallel batch runs and aggregate rates

use bb_core::{simulate_seeded, GameRecord, ModelConfig, Result, TeamSide};
use rayon::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub games: u64,
    pub total_runs: u64,
    pub home_wins: u64,
    pub extra_inning_games: u64,
    pub walkoffs: u64,
    pub skipped_bottom_halves: u64,
    pub plate_appearances: u64,
    pub pitches: u64,
}

impl BatchSummary {
    fn record(mut self, game: &GameRecord) -> Self {
        self.games += 1;
        self.total_runs += game.total_runs() as u64;
        self.home_wins += (game.winner() == Some(TeamSide::Home)) as u64;
        self.extra_inning_games += game.is_extra_innings() as u64;
        self.walkoffs += game.ended_on_walkoff() as u64;
        self.skipped_bottom_halves += game.skipped_bottom_half() as u64;
        self.plate_appearances += game.plays.len() as u64;
        self.pitches += (game.box_score.away.pitcher.pitches
            + game.box_score.home.pitcher.pitches) as u64;
        self
    }

    fn merge(mut self, other: Self) -> Self {
        self.games += other.games;
        self.total_runs += other.total_runs;
        self.home_wins += other.home_wins;
        self.extra_inning_games += other.extra_inning_games;
        self.walkoffs += other.walkoffs;
        self.skipped_bottom_halves += other.skipped_bottom_halves;
        self.plate_appearances += other.plate_appearances;
        self.pitches += other.pitches;
        self
    }

    fn rate(&self, count: u64) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            count as f64 / self.games as f64
        }
    }

    pub fn runs_per_game(&self) -> f64 {
        self.rate(self.total_runs)
    }

    pub fn home_win_rate(&self) -> f64 {
        self.rate(self.home_wins)
    }

    pub fn extra_inning_rate(&self) -> f64 {
        self.rate(self.extra_inning_games)
    }

    pub fn walkoff_rate(&self) -> f64 {
        self.rate(self.walkoffs)
    }

    pub fn skipped_bottom_rate(&self) -> f64 {
        self.rate(self.skipped_bottom_halves)
    }

    pub fn pitches_per_pa(&self) -> f64 {
        if self.plate_appearances == 0 {
            0.0
        } else {
            self.pitches as f64 / self.plate_appearances as f64
        }
    }
}

/// Game `i` is seeded with `seed + i`; the result does not depend on thread count.
pub fn run_batch(config: &ModelConfig, games: u64, seed: u64) -> Result<BatchSummary> {
    (0..games)
        .into_par_iter()
        .map(|i| simulate_seeded(config.clone(), seed.wrapping_add(i)))
        .try_fold(BatchSummary::default, |acc, game| game.map(|g| acc.record(&g)))
        .try_reduce(BatchSummary::default, |a, b| Ok(a.merge(b)))
}
