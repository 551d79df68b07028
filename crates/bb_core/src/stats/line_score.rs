//! Inning-by-inning line score

use serde::{Deserialize, Serialize};

use crate::engine::state::TeamSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InningCell {
    Runs(u32),
    /// Home half not played (home already ahead after the top half). Rendered `X`.
    Skipped,
}

impl std::fmt::Display for InningCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InningCell::Runs(r) => write!(f, "{r}"),
            InningCell::Skipped => write!(f, "X"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamLine {
    pub innings: Vec<InningCell>,
    /// Left on base per completed half; skipped halves record nothing.
    pub left_on_base: Vec<u32>,
}

impl TeamLine {
    pub fn runs(&self) -> u32 {
        self.innings
            .iter()
            .map(|c| match c {
                InningCell::Runs(r) => *r,
                InningCell::Skipped => 0,
            })
            .sum()
    }

    pub fn total_lob(&self) -> u32 {
        self.left_on_base.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineScore {
    pub away: TeamLine,
    pub home: TeamLine,
}

impl LineScore {
    pub fn team(&self, side: TeamSide) -> &TeamLine {
        match side {
            TeamSide::Away => &self.away,
            TeamSide::Home => &self.home,
        }
    }

    fn team_mut(&mut self, side: TeamSide) -> &mut TeamLine {
        match side {
            TeamSide::Away => &mut self.away,
            TeamSide::Home => &mut self.home,
        }
    }

    pub fn record_half(&mut self, side: TeamSide, runs: u32, left_on_base: u32) {
        let line = self.team_mut(side);
        line.innings.push(InningCell::Runs(runs));
        line.left_on_base.push(left_on_base);
    }

    pub fn record_skipped(&mut self, side: TeamSide) {
        self.team_mut(side).innings.push(InningCell::Skipped);
    }

    pub fn innings_played(&self) -> usize {
        self.away.innings.len().max(self.home.innings.len())
    }
}
