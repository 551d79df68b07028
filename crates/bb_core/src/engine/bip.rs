//! Ball-In-Play Outcome Sampler
//!
//! Power pushes probability mass toward extra-base hits (home runs most,
//! triples least) at the expense of singles and outs. Stuff pushes mass
//! toward outs and scales every hit category down by the same factor, so the
//! hit mix is preserved.

use serde::{Deserialize, Serialize};

use super::config::BipConfig;
use super::ratings::normalize;
use super::rng::RandomSource;

/// Category order is also the sampling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BipOutcome {
    Out,
    Single,
    Double,
    Triple,
    HomeRun,
}

impl BipOutcome {
    pub const ALL: [BipOutcome; 5] = [
        BipOutcome::Out,
        BipOutcome::Single,
        BipOutcome::Double,
        BipOutcome::Triple,
        BipOutcome::HomeRun,
    ];

    /// Bases the batter takes on a clean hit.
    pub fn bases(&self) -> u8 {
        match self {
            BipOutcome::Out => 0,
            BipOutcome::Single => 1,
            BipOutcome::Double => 2,
            BipOutcome::Triple => 3,
            BipOutcome::HomeRun => 4,
        }
    }
}

/// Outcome probabilities in `BipOutcome::ALL` order. Always non-negative and normalized.
pub fn distribution(cfg: &BipConfig, power: u8, stuff: u8) -> [f64; 5] {
    let [mut out, mut single, mut double, mut triple, mut hr] = cfg.base_rates.as_array();

    let p = normalize(power) - 0.5;
    let s = normalize(stuff) - 0.5;

    let power_shift = cfg.power_swing * p;
    hr += power_shift * cfg.power_hr_weight;
    double += power_shift * cfg.power_double_weight;
    triple += power_shift * cfg.power_triple_weight;
    single -= power_shift * cfg.power_single_share;
    out -= power_shift * (1.0 - cfg.power_single_share);

    let out_shift = cfg.stuff_swing * s;
    let hit_total = single + double + triple + hr;
    if hit_total > 0.0 {
        let scale = ((hit_total - out_shift) / hit_total).max(0.0);
        single *= scale;
        double *= scale;
        triple *= scale;
        hr *= scale;
    }
    out += out_shift;

    let mut probs = [out, single, double, triple, hr].map(|v| v.max(0.0));
    let total: f64 = probs.iter().sum();
    if total <= 0.0 {
        // Every component clamped away; fall back to the base table.
        return cfg.base_rates.as_array();
    }
    for v in probs.iter_mut() {
        *v /= total;
    }
    probs
}

pub struct BipSampler<'a> {
    config: &'a BipConfig,
}

impl<'a> BipSampler<'a> {
    pub fn new(config: &'a BipConfig) -> Self {
        Self { config }
    }

    /// One uniform draw against the cumulative distribution.
    pub fn resolve(&self, power: u8, stuff: u8, rng: &mut dyn RandomSource) -> BipOutcome {
        let probs = distribution(self.config, power, stuff);
        sample(&probs, rng.next_f64())
    }
}

fn sample(probs: &[f64; 5], u: f64) -> BipOutcome {
    let mut cumulative = 0.0;
    for (outcome, p) in BipOutcome::ALL.iter().zip(probs.iter()) {
        cumulative += p;
        if u < cumulative {
            return *outcome;
        }
    }
    // u within rounding error of 1.0
    BipOutcome::ALL
        .iter()
        .zip(probs.iter())
        .rev()
        .find(|(_, p)| **p > 0.0)
        .map(|(o, _)| *o)
        .unwrap_or(BipOutcome::Out)
}
