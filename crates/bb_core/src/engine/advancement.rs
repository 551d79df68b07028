//! Runner-Advancement Resolver
//!
//! Pure mapping from (plate outcome, bases, outs) to a complete description of
//! the play: outs, runs, new bases, RBI, error flags and every runner's
//! movement. The only randomness is the reach-on-error / double-play /
//! sacrifice-fly rolls on a ball-in-play out.
//!
//! ## Ball-in-play out
//!
//! ```text
//! ROE roll ── hit ──► batter to 1st, runners +1 (unearned, no RBI)
//!    │
//!  miss
//!    ▼
//! runner on 1st, <2 outs? ── DP roll hit ──► batter + runner from 1st out
//!    │
//!  no / miss
//!    ▼
//! runner on 3rd, <2 outs? ── SF roll hit ──► runner from 3rd scores, RBI 1
//!    │
//!  no / miss
//!    ▼
//! regular out, runners hold
//! ```

use serde::{Deserialize, Serialize};

use super::bases::{BaseState, FIRST, HOME, SCORED, SECOND, THIRD};
use super::bip::BipOutcome;
use super::config::AdvancementConfig;
use super::pitch::Terminal;
use super::rng::{roll, RandomSource};
use crate::error::{EngineError, Result};

pub const OUTS_PER_HALF: u8 = 3;

/// What the plate appearance produced before runner resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlateOutcome {
    Strikeout,
    Walk,
    HitByPitch,
    InPlay(BipOutcome),
}

impl PlateOutcome {
    /// Pairs a pitch-engine terminal with the sampler's outcome.
    /// `BallInPlay` requires a BIP outcome and nothing else accepts one.
    pub fn from_parts(terminal: Terminal, bip: Option<BipOutcome>) -> Result<Self> {
        match (terminal, bip) {
            (Terminal::Strikeout, None) => Ok(PlateOutcome::Strikeout),
            (Terminal::Walk, None) => Ok(PlateOutcome::Walk),
            (Terminal::HitByPitch, None) => Ok(PlateOutcome::HitByPitch),
            (Terminal::BallInPlay, Some(outcome)) => Ok(PlateOutcome::InPlay(outcome)),
            (terminal, bip) => Err(EngineError::InconsistentOutcome(format!(
                "terminal {terminal:?} with ball-in-play outcome {bip:?}"
            ))),
        }
    }

    pub fn terminal(&self) -> Terminal {
        match self {
            PlateOutcome::Strikeout => Terminal::Strikeout,
            PlateOutcome::Walk => Terminal::Walk,
            PlateOutcome::HitByPitch => Terminal::HitByPitch,
            PlateOutcome::InPlay(_) => Terminal::BallInPlay,
        }
    }

    pub fn bip(&self) -> Option<BipOutcome> {
        match self {
            PlateOutcome::InPlay(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

/// Scorebook classification of the resolved play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeTag {
    Strikeout,
    Walk,
    HitByPitch,
    Single,
    Double,
    Triple,
    HomeRun,
    Out,
    DoublePlay,
    SacFly,
    ReachedOnError,
}

impl OutcomeTag {
    pub fn is_hit(&self) -> bool {
        matches!(
            self,
            OutcomeTag::Single | OutcomeTag::Double | OutcomeTag::Triple | OutcomeTag::HomeRun
        )
    }

    /// Official at-bat: excludes walks, HBP and sacrifice flies.
    pub fn is_at_bat(&self) -> bool {
        !matches!(self, OutcomeTag::Walk | OutcomeTag::HitByPitch | OutcomeTag::SacFly)
    }

    pub fn batter_reaches(&self) -> bool {
        matches!(
            self,
            OutcomeTag::Walk
                | OutcomeTag::HitByPitch
                | OutcomeTag::Single
                | OutcomeTag::Double
                | OutcomeTag::Triple
                | OutcomeTag::HomeRun
                | OutcomeTag::ReachedOnError
        )
    }
}

/// One runner's (or the batter's) movement on the play.
///
/// `from`: 0 = batter, 1..=3 = base. `to`: 1..=3 = base, 4 = home.
/// A runner put out records the base he was retired at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerMove {
    pub from: u8,
    pub to: u8,
    pub scored: bool,
    pub was_forced: bool,
    pub put_out: bool,
    pub on_error: bool,
}

impl RunnerMove {
    fn advance(from: u8, to: u8, was_forced: bool) -> Self {
        let to = to.min(SCORED);
        Self { from, to, scored: to == SCORED, was_forced, put_out: false, on_error: false }
    }

    fn out_at(from: u8, at: u8, was_forced: bool) -> Self {
        Self { from, to: at, scored: false, was_forced, put_out: true, on_error: false }
    }

    fn on_error(mut self) -> Self {
        self.on_error = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaResolution {
    pub outcome: PlateOutcome,
    pub tag: OutcomeTag,
    pub outs_added: u8,
    pub runs_scored: u8,
    pub new_bases: BaseState,
    pub is_double_play: bool,
    pub is_sac_fly: bool,
    pub had_error: bool,
    pub rbi_for_batter: u8,
    /// Bases as they stood before runners advanced on the error.
    pub advance_on_error: Option<BaseState>,
    /// Runners on base at the instant of the third out; present iff this play ends the half.
    pub bases_at_third_out: Option<BaseState>,
    /// Lead runner first, batter last.
    pub movements: Vec<RunnerMove>,
}

impl PaResolution {
    fn base(outcome: PlateOutcome, tag: OutcomeTag, bases: BaseState) -> Self {
        Self {
            outcome,
            tag,
            outs_added: 0,
            runs_scored: 0,
            new_bases: bases,
            is_double_play: false,
            is_sac_fly: false,
            had_error: false,
            rbi_for_batter: 0,
            advance_on_error: None,
            bases_at_third_out: None,
            movements: Vec::new(),
        }
    }

    pub fn records_third_out(&self) -> bool {
        self.bases_at_third_out.is_some()
    }

    pub fn any_error_advance(&self) -> bool {
        self.movements.iter().any(|m| m.on_error)
    }

    /// Stamps the third-out snapshot when the play ends the half.
    fn with_third_out_snapshot(mut self, outs_before: u8) -> Self {
        if outs_before + self.outs_added >= OUTS_PER_HALF {
            self.bases_at_third_out = Some(self.new_bases);
        }
        self
    }
}

pub struct RunnerAdvancement<'a> {
    config: &'a AdvancementConfig,
}

impl<'a> RunnerAdvancement<'a> {
    pub fn new(config: &'a AdvancementConfig) -> Self {
        Self { config }
    }

    pub fn resolve(
        &self,
        outcome: PlateOutcome,
        bases: BaseState,
        outs: u8,
        rng: &mut dyn RandomSource,
    ) -> Result<PaResolution> {
        if outs >= OUTS_PER_HALF {
            return Err(EngineError::OutsOverflow { outs, added: 0 });
        }

        let resolution = match outcome {
            PlateOutcome::Strikeout => batter_out(outcome, OutcomeTag::Strikeout, bases),
            PlateOutcome::Walk => forced_walk(outcome, OutcomeTag::Walk, bases),
            PlateOutcome::HitByPitch => forced_walk(outcome, OutcomeTag::HitByPitch, bases),
            PlateOutcome::InPlay(BipOutcome::Out) => self.ball_in_play_out(bases, outs, rng),
            PlateOutcome::InPlay(hit) => clean_hit(hit, bases),
        };
        Ok(resolution.with_third_out_snapshot(outs))
    }

    fn ball_in_play_out(
        &self,
        bases: BaseState,
        outs: u8,
        rng: &mut dyn RandomSource,
    ) -> PaResolution {
        if roll(rng, self.config.reach_on_error_rate) {
            return reach_on_error(bases);
        }
        if bases.on_first && outs < 2 && roll(rng, self.config.double_play_rate) {
            return double_play(bases, outs);
        }
        if bases.on_third && outs < 2 && roll(rng, self.config.sac_fly_rate) {
            return sac_fly(bases);
        }
        batter_out(PlateOutcome::InPlay(BipOutcome::Out), OutcomeTag::Out, bases)
    }
}

// ============================================================================
// Branches
// ============================================================================

fn batter_out(outcome: PlateOutcome, tag: OutcomeTag, bases: BaseState) -> PaResolution {
    let mut res = PaResolution::base(outcome, tag, bases);
    res.outs_added = 1;
    res.movements.push(RunnerMove::out_at(HOME, FIRST, false));
    res
}

/// Batter to first; runners move only while the base behind them is filled.
fn forced_walk(outcome: PlateOutcome, tag: OutcomeTag, bases: BaseState) -> PaResolution {
    let mut res = PaResolution::base(outcome, tag, bases);
    let mut new_bases = bases;
    new_bases.on_first = true;

    if bases.on_first {
        if bases.on_second {
            if bases.on_third {
                res.movements.push(RunnerMove::advance(THIRD, SCORED, true));
                res.runs_scored = 1;
                res.rbi_for_batter = 1;
            }
            res.movements.push(RunnerMove::advance(SECOND, THIRD, true));
            new_bases.on_third = true;
        }
        res.movements.push(RunnerMove::advance(FIRST, SECOND, true));
        new_bases.on_second = true;
    }
    res.movements.push(RunnerMove::advance(HOME, FIRST, true));
    res.new_bases = new_bases;
    res
}

fn reach_on_error(bases: BaseState) -> PaResolution {
    let outcome = PlateOutcome::InPlay(BipOutcome::Out);
    let mut res = PaResolution::base(outcome, OutcomeTag::ReachedOnError, bases);
    for from in bases.runners_lead_first() {
        let mv = RunnerMove::advance(from, from + 1, bases.is_forced(from)).on_error();
        if mv.scored {
            res.runs_scored += 1;
        }
        res.movements.push(mv);
    }
    res.movements.push(RunnerMove::advance(HOME, FIRST, true).on_error());
    res.new_bases = BaseState::new(true, bases.on_first, bases.on_second);
    res.had_error = true;
    res.advance_on_error = Some(bases);
    res
}

/// Batter and the runner from first are retired. A runner on third scores only
/// with nobody out; the runner on second takes third once it is vacated.
fn double_play(bases: BaseState, outs: u8) -> PaResolution {
    let outcome = PlateOutcome::InPlay(BipOutcome::Out);
    let mut res = PaResolution::base(outcome, OutcomeTag::DoublePlay, bases);
    res.outs_added = 2;
    res.is_double_play = true;

    let mut new_bases = BaseState::EMPTY;
    let third_scores = bases.on_third && outs == 0;
    if bases.on_third {
        if third_scores {
            res.movements.push(RunnerMove::advance(THIRD, SCORED, bases.is_forced(THIRD)));
            res.runs_scored = 1;
        } else {
            new_bases.on_third = true;
        }
    }
    if bases.on_second {
        if new_bases.on_third {
            new_bases.on_second = true;
        } else {
            res.movements.push(RunnerMove::advance(SECOND, THIRD, true));
            new_bases.on_third = true;
        }
    }
    res.movements.push(RunnerMove::out_at(FIRST, SECOND, true));
    res.movements.push(RunnerMove::out_at(HOME, FIRST, true));
    res.new_bases = new_bases;
    res
}

fn sac_fly(bases: BaseState) -> PaResolution {
    let outcome = PlateOutcome::InPlay(BipOutcome::Out);
    let mut res = PaResolution::base(outcome, OutcomeTag::SacFly, bases);
    res.outs_added = 1;
    res.is_sac_fly = true;
    res.runs_scored = 1;
    res.rbi_for_batter = 1;
    res.movements.push(RunnerMove::advance(THIRD, SCORED, false));
    res.movements.push(RunnerMove::out_at(HOME, FIRST, false));
    res.new_bases = BaseState { on_third: false, ..bases };
    res
}

/// Every runner moves as many bases as the batter takes.
fn clean_hit(hit: BipOutcome, bases: BaseState) -> PaResolution {
    let tag = match hit {
        BipOutcome::Single => OutcomeTag::Single,
        BipOutcome::Double => OutcomeTag::Double,
        BipOutcome::Triple => OutcomeTag::Triple,
        BipOutcome::HomeRun => OutcomeTag::HomeRun,
        BipOutcome::Out => OutcomeTag::Out,
    };
    let mut res = PaResolution::base(PlateOutcome::InPlay(hit), tag, bases);
    let n = hit.bases();
    let mut new_bases = BaseState::EMPTY;

    for from in bases.runners_lead_first() {
        let mv = RunnerMove::advance(from, from + n, bases.is_forced(from));
        if mv.scored {
            res.runs_scored += 1;
        } else {
            new_bases.set(mv.to, true);
        }
        res.movements.push(mv);
    }

    let batter = RunnerMove::advance(HOME, n, true);
    if batter.scored {
        res.runs_scored += 1;
    } else {
        new_bases.set(batter.to, true);
    }
    res.movements.push(batter);

    res.new_bases = new_bases;
    res.rbi_for_batter = res.runs_scored;
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rng::ScriptedRng;

    const NO_ROE: f64 = 0.99;
    const YES: f64 = 0.0;
    const NO: f64 = 0.99;

    fn resolve_with(
        outcome: PlateOutcome,
        bases: BaseState,
        outs: u8,
        script: &[f64],
    ) -> PaResolution {
        let cfg = AdvancementConfig::default();
        let mut rng = ScriptedRng::new(script.iter().copied());
        RunnerAdvancement::new(&cfg).resolve(outcome, bases, outs, &mut rng).unwrap()
    }

    #[test]
    fn test_strikeout_keeps_bases() {
        let bases = BaseState::new(true, false, true);
        let res = resolve_with(PlateOutcome::Strikeout, bases, 0, &[]);
        assert_eq!(res.outs_added, 1);
        assert_eq!(res.new_bases, bases);
        assert_eq!(res.runs_scored, 0);
        assert_eq!(res.rbi_for_batter, 0);
        assert!(res.bases_at_third_out.is_none());
    }

    #[test]
    fn test_two_out_strikeout_snapshots_bases() {
        let bases = BaseState::new(false, true, true);
        let res = resolve_with(PlateOutcome::Strikeout, bases, 2, &[]);
        assert_eq!(res.bases_at_third_out, Some(bases));
    }

    #[test]
    fn test_walk_cascade_stops_at_gap() {
        let bases = BaseState::new(true, false, true);
        let res = resolve_with(PlateOutcome::Walk, bases, 0, &[]);
        assert_eq!(res.new_bases, BaseState::LOADED);
        assert_eq!(res.runs_scored, 0);
        assert_eq!(res.rbi_for_batter, 0);
        // runner on third did not move
        assert!(res.movements.iter().all(|m| m.from != THIRD));
    }

    #[test]
    fn test_walk_with_runner_on_second_only() {
        let bases = BaseState::new(false, true, false);
        let res = resolve_with(PlateOutcome::Walk, bases, 1, &[]);
        assert_eq!(res.new_bases, BaseState::new(true, true, false));
        assert_eq!(res.movements.len(), 1);
    }

    #[test]
    fn test_bases_loaded_walk_and_hbp_force_run() {
        for outcome in [PlateOutcome::Walk, PlateOutcome::HitByPitch] {
            let res = resolve_with(outcome, BaseState::LOADED, 2, &[]);
            assert_eq!(res.runs_scored, 1);
            assert_eq!(res.rbi_for_batter, 1);
            assert_eq!(res.new_bases, BaseState::LOADED);
            assert_eq!(res.movements.len(), 4);
            assert!(res.movements[0].scored);
        }
    }

    #[test]
    fn test_reach_on_error() {
        let bases = BaseState::new(false, true, true);
        let res = resolve_with(PlateOutcome::InPlay(BipOutcome::Out), bases, 1, &[YES]);
        assert_eq!(res.tag, OutcomeTag::ReachedOnError);
        assert_eq!(res.outs_added, 0);
        assert_eq!(res.runs_scored, 1);
        assert_eq!(res.rbi_for_batter, 0);
        assert!(res.had_error);
        assert!(res.any_error_advance());
        assert_eq!(res.advance_on_error, Some(bases));
        assert_eq!(res.new_bases, BaseState::new(true, false, true));
    }

    #[test]
    fn test_roe_is_rolled_before_double_play() {
        let res = resolve_with(
            PlateOutcome::InPlay(BipOutcome::Out),
            BaseState::new(true, false, false),
            0,
            &[YES, YES],
        );
        assert_eq!(res.tag, OutcomeTag::ReachedOnError);
    }

    #[test]
    fn test_double_play_nobody_out_scores_from_third_without_rbi() {
        let res = resolve_with(
            PlateOutcome::InPlay(BipOutcome::Out),
            BaseState::LOADED,
            0,
            &[NO_ROE, YES],
        );
        assert!(res.is_double_play);
        assert_eq!(res.outs_added, 2);
        assert_eq!(res.runs_scored, 1);
        assert_eq!(res.rbi_for_batter, 0);
        assert_eq!(res.new_bases, BaseState::new(false, false, true));
        assert!(res.bases_at_third_out.is_none());
    }

    #[test]
    fn test_double_play_one_out_ends_half() {
        let res = resolve_with(
            PlateOutcome::InPlay(BipOutcome::Out),
            BaseState::LOADED,
            1,
            &[NO_ROE, YES],
        );
        assert_eq!(res.outs_added, 2);
        assert_eq!(res.runs_scored, 0);
        assert_eq!(res.new_bases, BaseState::new(false, true, true));
        assert_eq!(res.bases_at_third_out, Some(BaseState::new(false, true, true)));
    }

    #[test]
    fn test_no_double_play_with_two_outs() {
        let res = resolve_with(
            PlateOutcome::InPlay(BipOutcome::Out),
            BaseState::new(true, false, false),
            2,
            &[NO_ROE, YES],
        );
        assert_eq!(res.tag, OutcomeTag::Out);
        assert_eq!(res.outs_added, 1);
        assert!(res.bases_at_third_out.is_some());
    }

    #[test]
    fn test_sac_fly_after_failed_double_play_roll() {
        let res = resolve_with(
            PlateOutcome::InPlay(BipOutcome::Out),
            BaseState::new(true, false, true),
            1,
            &[NO_ROE, NO, YES],
        );
        assert!(res.is_sac_fly);
        assert_eq!(res.runs_scored, 1);
        assert_eq!(res.rbi_for_batter, 1);
        assert_eq!(res.outs_added, 1);
        assert_eq!(res.new_bases, BaseState::new(true, false, false));
    }

    #[test]
    fn test_regular_out_runners_hold() {
        let bases = BaseState::new(false, true, false);
        let res = resolve_with(PlateOutcome::InPlay(BipOutcome::Out), bases, 0, &[NO_ROE]);
        assert_eq!(res.tag, OutcomeTag::Out);
        assert_eq!(res.new_bases, bases);
    }

    #[test]
    fn test_single_advances_one_base() {
        let res =
            resolve_with(PlateOutcome::InPlay(BipOutcome::Single), BaseState::LOADED, 0, &[]);
        assert_eq!(res.runs_scored, 1);
        assert_eq!(res.rbi_for_batter, 1);
        assert_eq!(res.new_bases, BaseState::LOADED);
    }

    #[test]
    fn test_double_scores_second_and_third() {
        let res =
            resolve_with(PlateOutcome::InPlay(BipOutcome::Double), BaseState::LOADED, 1, &[]);
        assert_eq!(res.runs_scored, 2);
        assert_eq!(res.new_bases, BaseState::new(false, true, true));
    }

    #[test]
    fn test_triple_clears_runners() {
        let res = resolve_with(
            PlateOutcome::InPlay(BipOutcome::Triple),
            BaseState::new(true, true, false),
            0,
            &[],
        );
        assert_eq!(res.runs_scored, 2);
        assert_eq!(res.new_bases, BaseState::new(false, false, true));
    }

    #[test]
    fn test_grand_slam() {
        let res =
            resolve_with(PlateOutcome::InPlay(BipOutcome::HomeRun), BaseState::LOADED, 2, &[]);
        assert_eq!(res.runs_scored, 4);
        assert_eq!(res.rbi_for_batter, 4);
        assert!(res.new_bases.is_empty());
        assert_eq!(res.movements.len(), 4);
        assert!(res.movements.iter().all(|m| m.scored));
    }

    #[test]
    fn test_hits_draw_no_randomness() {
        let cfg = AdvancementConfig::default();
        let mut rng = ScriptedRng::new([]);
        RunnerAdvancement::new(&cfg)
            .resolve(PlateOutcome::InPlay(BipOutcome::Double), BaseState::EMPTY, 0, &mut rng)
            .unwrap();
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_from_parts_rejects_inconsistent() {
        assert!(PlateOutcome::from_parts(Terminal::BallInPlay, None).is_err());
        assert!(PlateOutcome::from_parts(Terminal::Walk, Some(BipOutcome::Single)).is_err());
        assert_eq!(
            PlateOutcome::from_parts(Terminal::BallInPlay, Some(BipOutcome::Triple)).unwrap(),
            PlateOutcome::InPlay(BipOutcome::Triple)
        );
    }

    #[test]
    fn test_rejects_three_outs() {
        let cfg = AdvancementConfig::default();
        let mut rng = ScriptedRng::new([]);
        let err = RunnerAdvancement::new(&cfg)
            .resolve(PlateOutcome::Strikeout, BaseState::EMPTY, 3, &mut rng)
            .unwrap_err();
        assert!(err.is_fatal());
    }

    mod proptests {
        use super::*;
        use crate::engine::rng::SeededRng;
        use proptest::prelude::*;

        fn outcome_strategy() -> impl Strategy<Value = PlateOutcome> {
            prop_oneof![
                Just(PlateOutcome::Strikeout),
                Just(PlateOutcome::Walk),
                Just(PlateOutcome::HitByPitch),
                Just(PlateOutcome::InPlay(BipOutcome::Out)),
                Just(PlateOutcome::InPlay(BipOutcome::Single)),
                Just(PlateOutcome::InPlay(BipOutcome::Double)),
                Just(PlateOutcome::InPlay(BipOutcome::Triple)),
                Just(PlateOutcome::InPlay(BipOutcome::HomeRun)),
            ]
        }

        proptest! {
            /// Property: runs and RBI obey the scoring rules for every situation
            #[test]
            fn prop_resolution_consistent(
                outcome in outcome_strategy(),
                first in any::<bool>(), second in any::<bool>(), third in any::<bool>(),
                outs in 0u8..3,
                seed in any::<u64>()
            ) {
                let cfg = AdvancementConfig {
                    reach_on_error_rate: 0.2,
                    double_play_rate: 0.5,
                    sac_fly_rate: 0.5,
                };
                let bases = BaseState::new(first, second, third);
                let mut rng = SeededRng::new(seed);
                let res = RunnerAdvancement::new(&cfg).resolve(outcome, bases, outs, &mut rng).unwrap();

                prop_assert!(res.runs_scored <= bases.runner_count() + 1);
                prop_assert!(outs + res.outs_added <= OUTS_PER_HALF);
                prop_assert_eq!(res.records_third_out(), outs + res.outs_added == OUTS_PER_HALF);
                prop_assert_eq!(
                    res.movements.iter().filter(|m| m.scored).count() as u8,
                    res.runs_scored
                );
                match res.tag {
                    OutcomeTag::ReachedOnError | OutcomeTag::DoublePlay => {
                        prop_assert_eq!(res.rbi_for_batter, 0)
                    }
                    OutcomeTag::SacFly => prop_assert_eq!(res.rbi_for_batter, 1),
                    OutcomeTag::Walk | OutcomeTag::HitByPitch => {
                        prop_assert_eq!(res.rbi_for_batter, u8::from(bases.is_loaded()))
                    }
                    _ => prop_assert_eq!(res.rbi_for_batter, res.runs_scored),
                }
                // runners left on base + scored + retired runners = runners before + batter
                let retired_runners =
                    res.movements.iter().filter(|m| m.put_out && m.from != HOME).count() as u8;
                let batter_retired = res.movements.iter().any(|m| m.put_out && m.from == HOME);
                prop_assert_eq!(res.tag.batter_reaches(), !batter_retired);
                prop_assert_eq!(
                    res.new_bases.runner_count() + res.runs_scored + retired_runners
                        + u8::from(batter_retired),
                    bases.runner_count() + 1
                );
            }
        }
    }
}
