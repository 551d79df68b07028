//! Game statistics accumulators
//!
//! The only state carried between plate appearances besides `GameState`.
//! `ScoreKeeper` is handed to the state engine by `&mut` on every play.

mod box_score;
mod line_score;

pub use box_score::{BattingLine, BoxScore, PitchingLine, TeamBox};
pub use line_score::{InningCell, LineScore, TeamLine};

use serde::{Deserialize, Serialize};

use crate::engine::state::TeamSide;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreKeeper {
    pub box_score: BoxScore,
    pub line_score: LineScore,
    /// Runs scored so far in the half inning being played.
    pub half_runs: u32,
}

impl ScoreKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_pitches(&mut self, defense: TeamSide, pitches: u32) {
        self.box_score.record_pitches(defense, pitches);
    }

    /// Closes the current half in the line score and resets the run counter.
    pub(crate) fn close_half(&mut self, offense: TeamSide, left_on_base: u32) -> u32 {
        let runs = std::mem::take(&mut self.half_runs);
        self.line_score.record_half(offense, runs, left_on_base);
        runs
    }
}
