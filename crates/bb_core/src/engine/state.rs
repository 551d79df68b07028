//! Authoritative game state
//!
//! `GameState` is a value: the state engine consumes one snapshot per plate
//! appearance and returns the next. Nothing mutates a state in place once it
//! has been handed out.

use serde::{Deserialize, Serialize};

use super::bases::BaseState;

pub const REGULATION_INNINGS: u32 = 9;
/// Hard safety cap; reaching it means the model produces unending ties.
pub const MAX_INNINGS: u32 = 99;
pub const LINEUP_SIZE: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Half {
    Top,
    Bottom,
}

impl Half {
    /// Team at bat in this half.
    pub fn offense(&self) -> TeamSide {
        match self {
            Half::Top => TeamSide::Away,
            Half::Bottom => TeamSide::Home,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    Away,
    Home,
}

impl TeamSide {
    pub fn other(&self) -> TeamSide {
        match self {
            TeamSide::Away => TeamSide::Home,
            TeamSide::Home => TeamSide::Away,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamTotals {
    pub runs: u32,
    pub earned_runs: u32,
    pub unearned_runs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub inning: u32,
    pub half: Half,
    /// 0..=2 between plays.
    pub outs: u8,
    pub bases: BaseState,
    pub away: TeamTotals,
    pub home: TeamTotals,
    /// Next batter's lineup slot, 0..=8.
    pub away_batting_index: u8,
    pub home_batting_index: u8,
    pub is_final: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            inning: 1,
            half: Half::Top,
            outs: 0,
            bases: BaseState::EMPTY,
            away: TeamTotals::default(),
            home: TeamTotals::default(),
            away_batting_index: 0,
            home_batting_index: 0,
            is_final: false,
        }
    }

    pub fn offense(&self) -> TeamSide {
        self.half.offense()
    }

    pub fn defense(&self) -> TeamSide {
        self.half.offense().other()
    }

    pub fn totals(&self, side: TeamSide) -> &TeamTotals {
        match side {
            TeamSide::Away => &self.away,
            TeamSide::Home => &self.home,
        }
    }

    pub(crate) fn totals_mut(&mut self, side: TeamSide) -> &mut TeamTotals {
        match side {
            TeamSide::Away => &mut self.away,
            TeamSide::Home => &mut self.home,
        }
    }

    pub fn runs(&self, side: TeamSide) -> u32 {
        self.totals(side).runs
    }

    pub fn batting_index(&self, side: TeamSide) -> u8 {
        match side {
            TeamSide::Away => self.away_batting_index,
            TeamSide::Home => self.home_batting_index,
        }
    }

    pub(crate) fn advance_batting_order(&mut self, side: TeamSide) {
        let slot = match side {
            TeamSide::Away => &mut self.away_batting_index,
            TeamSide::Home => &mut self.home_batting_index,
        };
        *slot = (*slot + 1) % LINEUP_SIZE;
    }

    /// Team strictly ahead, if any.
    pub fn leader(&self) -> Option<TeamSide> {
        use std::cmp::Ordering;
        match self.home.runs.cmp(&self.away.runs) {
            Ordering::Greater => Some(TeamSide::Home),
            Ordering::Less => Some(TeamSide::Away),
            Ordering::Equal => None,
        }
    }

    /// Winner once the game is final.
    pub fn winner(&self) -> Option<TeamSide> {
        if self.is_final {
            self.leader()
        } else {
            None
        }
    }
}
