//! Pitch/Count Engine
//!
//! Simulates one plate appearance pitch by pitch until a terminal outcome.
//!
//! ## Draw order (per pitch)
//!
//! | Roll | Consumed when |
//! |------|---------------|
//! | hit by pitch | always |
//! | zone | always (unless HBP) |
//! | swing | always (unless HBP) |
//! | contact | on a swing |
//! | foul vs in play | on contact |
//!
//! The order is part of the replay contract: changing it changes every game
//! produced from a given seed.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::config::PitchConfig;
use super::count::{Count, CountStep, FinalCount};
use super::ratings::{offset, BatterRatings, PitcherRatings};
use super::rng::{roll, RandomSource};

/// Hard cap on pitches in one plate appearance.
pub const MAX_PITCHES: u32 = 50;

/// How a plate appearance ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terminal {
    Strikeout,
    Walk,
    HitByPitch,
    BallInPlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PitchKind {
    Ball,
    CalledStrike,
    SwingingStrike,
    Foul,
    InPlay,
    HitByPitch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchEvent {
    pub kind: PitchKind,
    pub count_before: Count,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtBatResult {
    pub terminal: Terminal,
    pub final_count: FinalCount,
    pub pitch_count: u32,
    pub pitches: Vec<PitchEvent>,
    /// Set when the pitch cap forced resolution from the count.
    pub forced_by_cap: bool,
}

// ============================================================================
// Probability functions (pure)
// ============================================================================

/// In-zone probability for a pitcher's control.
#[inline]
pub fn zone_probability(cfg: &PitchConfig, control: u8) -> f64 {
    (cfg.zone_base + offset(control) * cfg.control_slope).clamp(0.0, 1.0)
}

/// Swing probability. Out-of-zone (chase) falls as patience rises.
#[inline]
pub fn swing_probability(cfg: &PitchConfig, in_zone: bool, patience: u8) -> f64 {
    if in_zone {
        cfg.in_zone_swing.clamp(0.0, 1.0)
    } else {
        (cfg.chase_base - offset(patience) * cfg.patience_slope).clamp(0.0, 1.0)
    }
}

#[inline]
pub fn contact_probability(cfg: &PitchConfig, contact: u8, stuff: u8, count: Count) -> f64 {
    let p = cfg.contact_base + offset(contact) * cfg.contact_slope
        - offset(stuff) * cfg.stuff_slope
        + cfg.count_adjust.for_count(count.balls(), count.strikes());
    p.clamp(0.0, 1.0)
}

/// Foul share of contact; batters protect the zone with two strikes.
#[inline]
pub fn foul_probability(cfg: &PitchConfig, count: Count) -> f64 {
    let p = if count.two_strikes() { cfg.foul_rate_two_strikes } else { cfg.foul_rate };
    p.clamp(0.0, 1.0)
}

// ============================================================================
// Engine
// ============================================================================

pub struct PitchEngine<'a> {
    config: &'a PitchConfig,
}

impl<'a> PitchEngine<'a> {
    pub fn new(config: &'a PitchConfig) -> Self {
        Self { config }
    }

    pub fn simulate(
        &self,
        pitcher: &PitcherRatings,
        batter: &BatterRatings,
        rng: &mut dyn RandomSource,
    ) -> AtBatResult {
        let cfg = self.config;
        let mut count = Count::default();
        let mut pitches = Vec::new();

        while (pitches.len() as u32) < MAX_PITCHES {
            let count_before = count;
            let mut record =
                |kind: PitchKind| pitches.push(PitchEvent { kind, count_before });

            if roll(rng, cfg.hbp_rate) {
                record(PitchKind::HitByPitch);
                return finish(Terminal::HitByPitch, count.into(), pitches, false);
            }

            let in_zone = roll(rng, zone_probability(cfg, pitcher.control));
            let swing = roll(rng, swing_probability(cfg, in_zone, batter.patience));

            let step = if !swing {
                if in_zone {
                    record(PitchKind::CalledStrike);
                    count.with_strike()
                } else {
                    record(PitchKind::Ball);
                    count.with_ball()
                }
            } else if !roll(rng, contact_probability(cfg, batter.contact, pitcher.stuff, count)) {
                record(PitchKind::SwingingStrike);
                count.with_strike()
            } else if roll(rng, foul_probability(cfg, count)) {
                record(PitchKind::Foul);
                CountStep::Continue(count.with_foul())
            } else {
                record(PitchKind::InPlay);
                return finish(Terminal::BallInPlay, count.into(), pitches, false);
            };

            match step {
                CountStep::Continue(next) => count = next,
                CountStep::Walk => {
                    let fc = FinalCount { balls: 4, strikes: count.strikes() };
                    return finish(Terminal::Walk, fc, pitches, false);
                }
                CountStep::Strikeout => {
                    let fc = FinalCount { balls: count.balls(), strikes: 3 };
                    return finish(Terminal::Strikeout, fc, pitches, false);
                }
            }
        }

        // Unreachable with a bounded model; resolve from the count instead of
        // returning an unfinished at-bat.
        warn!(
            pitches = pitches.len(),
            count = %count,
            "pitch cap reached without a terminal outcome; forcing resolution from count"
        );
        let terminal = if count.balls() >= 4 { Terminal::Walk } else { Terminal::Strikeout };
        finish(terminal, count.into(), pitches, true)
    }
}

fn finish(
    terminal: Terminal,
    final_count: FinalCount,
    pitches: Vec<PitchEvent>,
    forced_by_cap: bool,
) -> AtBatResult {
    AtBatResult { terminal, final_count, pitch_count: pitches.len() as u32, pitches, forced_by_cap }
}
