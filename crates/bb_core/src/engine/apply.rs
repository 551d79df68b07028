//! Inning/Game State Engine
//!
//! Applies a resolved play to the authoritative state. Strictly
//! deterministic: no randomness is consulted here.
//!
//! ## Order of operations
//!
//! 1. Walk-off clamp
//! 2. Runs to the batting team and the half-inning counter
//! 3. Outs, bases (cleared on a walk-off)
//! 4. RBI
//! 5. Earned / unearned split
//! 6. Box score, batting order
//! 7. Walk-off ends the game (LOB 0)
//! 8. Third out → half-inning transition

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::advancement::{OutcomeTag, PaResolution, OUTS_PER_HALF};
use super::bases::BaseState;
use super::state::{GameState, Half, TeamSide, LINEUP_SIZE, MAX_INNINGS, REGULATION_INNINGS};
use crate::error::{EngineError, Result};
use crate::stats::ScoreKeeper;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfSummary {
    pub inning: u32,
    pub half: Half,
    pub runs: u32,
    pub left_on_base: u32,
    /// The following home half was skipped and the game ended.
    pub skipped_home_half: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyResult {
    pub state_after: GameState,
    pub is_walkoff: bool,
    /// Outs on the board right after the play (3 when it ended the half).
    pub outs_after: u8,
    /// Runs credited after walk-off clamping.
    pub runs_credited: u32,
    pub rbi: u32,
    pub earned_runs: u32,
    pub unearned_runs: u32,
    pub half_ended: Option<HalfSummary>,
}

/// Runs the home team may credit on this play before the game ends, if the
/// walk-off rule is in force.
fn walkoff_threshold(state: &GameState) -> Option<u32> {
    let in_force = state.half == Half::Bottom
        && state.inning >= REGULATION_INNINGS
        && state.offense() == TeamSide::Home
        && state.home.runs <= state.away.runs;
    in_force.then(|| state.away.runs - state.home.runs + 1)
}

/// Rule-based RBI when the resolver did not supply one.
fn fallback_rbi(resolution: &PaResolution, runs: u32) -> u32 {
    match resolution.tag {
        OutcomeTag::ReachedOnError | OutcomeTag::DoublePlay => 0,
        OutcomeTag::Walk | OutcomeTag::HitByPitch => runs.min(1),
        OutcomeTag::SacFly => 1,
        OutcomeTag::Strikeout
        | OutcomeTag::Out
        | OutcomeTag::Single
        | OutcomeTag::Double
        | OutcomeTag::Triple
        | OutcomeTag::HomeRun => runs,
    }
}

/// Play-local classification: an error on an earlier play never taints these runs.
fn unearned_runs(resolution: &PaResolution, runs: u32) -> u32 {
    if resolution.tag == OutcomeTag::ReachedOnError
        || (resolution.had_error && resolution.any_error_advance())
    {
        runs
    } else {
        0
    }
}

pub fn apply(
    state: &GameState,
    resolution: &PaResolution,
    keeper: &mut ScoreKeeper,
) -> Result<ApplyResult> {
    if state.is_final {
        return Err(EngineError::GameAlreadyFinal);
    }
    if state.outs >= OUTS_PER_HALF || resolution.outs_added > OUTS_PER_HALF - state.outs {
        return Err(EngineError::OutsOverflow { outs: state.outs, added: resolution.outs_added });
    }

    let offense = state.offense();
    let slot = state.batting_index(offense);
    if slot >= LINEUP_SIZE {
        return Err(EngineError::BattingIndexOutOfRange { side: offense, index: slot });
    }

    // 1. walk-off clamp
    let mut runs = resolution.runs_scored as u32;
    let mut is_walkoff = false;
    if let Some(needed) = walkoff_threshold(state) {
        if resolution.tag == OutcomeTag::HomeRun {
            // dead ball: every runner scores
            is_walkoff = runs >= needed;
        } else if runs >= needed {
            runs = needed;
            is_walkoff = true;
        }
    }

    // 2-3. score, outs, bases
    let mut next = state.clone();
    next.totals_mut(offense).runs += runs;
    keeper.half_runs += runs;
    next.outs += resolution.outs_added;
    let outs_after = next.outs;
    next.bases = if is_walkoff { BaseState::EMPTY } else { resolution.new_bases };

    // 4. RBI
    let rbi = if resolution.rbi_for_batter != 0 {
        (resolution.rbi_for_batter as u32).min(runs)
    } else {
        fallback_rbi(resolution, runs)
    };

    // 5. earned / unearned
    let unearned = unearned_runs(resolution, runs);
    let earned = runs - unearned;
    {
        let totals = next.totals_mut(offense);
        totals.earned_runs += earned;
        totals.unearned_runs += unearned;
    }

    // 6. box score, batting order
    keeper.box_score.record_plate_appearance(offense, slot, resolution, runs, earned, rbi);
    next.advance_batting_order(offense);

    debug!(
        inning = state.inning,
        half = ?state.half,
        tag = ?resolution.tag,
        runs,
        rbi,
        outs = outs_after,
        bases = %next.bases,
        "plate appearance applied"
    );

    let mut result = ApplyResult {
        state_after: next,
        is_walkoff,
        outs_after,
        runs_credited: runs,
        rbi,
        earned_runs: earned,
        unearned_runs: unearned,
        half_ended: None,
    };

    // 7. walk-off
    if is_walkoff {
        let half_runs = keeper.close_half(offense, 0);
        result.state_after.is_final = true;
        result.half_ended = Some(HalfSummary {
            inning: state.inning,
            half: state.half,
            runs: half_runs,
            left_on_base: 0,
            skipped_home_half: false,
        });
        info!(
            inning = state.inning,
            away = result.state_after.away.runs,
            home = result.state_after.home.runs,
            "walk-off, game final"
        );
        return Ok(result);
    }

    // 8. third out
    if outs_after >= OUTS_PER_HALF {
        let summary = end_half(&mut result.state_after, resolution, keeper)?;
        result.half_ended = Some(summary);
    }
    Ok(result)
}

/// Half-inning transition. Mutates only the freshly built `next` state.
fn end_half(
    next: &mut GameState,
    resolution: &PaResolution,
    keeper: &mut ScoreKeeper,
) -> Result<HalfSummary> {
    let inning = next.inning;
    let half = next.half;
    let offense = next.offense();

    let snapshot = resolution
        .bases_at_third_out
        .ok_or(EngineError::MissingThirdOutSnapshot { inning, half })?;
    let left_on_base = snapshot.runner_count() as u32;
    let runs = keeper.close_half(offense, left_on_base);

    next.outs = 0;
    next.bases = BaseState::EMPTY;

    let mut summary =
        HalfSummary { inning, half, runs, left_on_base, skipped_home_half: false };

    match half {
        Half::Top => {
            if inning >= REGULATION_INNINGS && next.home.runs > next.away.runs {
                keeper.line_score.record_skipped(TeamSide::Home);
                next.is_final = true;
                summary.skipped_home_half = true;
                info!(inning, "home team ahead after the top half, bottom half skipped");
            } else {
                next.half = Half::Bottom;
            }
        }
        Half::Bottom => {
            if inning >= REGULATION_INNINGS && next.away.runs > next.home.runs {
                next.is_final = true;
                info!(inning, away = next.away.runs, home = next.home.runs, "game final");
            } else {
                let attempted = inning + 1;
                if attempted > MAX_INNINGS {
                    return Err(EngineError::InningCapExceeded { attempted, max: MAX_INNINGS });
                }
                next.inning = attempted;
                next.half = Half::Top;
            }
        }
    }

    debug!(inning, half = ?half, runs, left_on_base, "half inning complete");
    Ok(summary)
}
