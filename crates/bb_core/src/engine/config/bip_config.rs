//! Ball-in-play outcome model parameters

use serde::{Deserialize, Serialize};

/// Base outcome rates for a neutral batter against a neutral pitcher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BipRates {
    pub out: f64,
    pub single: f64,
    pub double: f64,
    pub triple: f64,
    pub home_run: f64,
}

impl BipRates {
    pub fn as_array(&self) -> [f64; 5] {
        [self.out, self.single, self.double, self.triple, self.home_run]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BipConfig {
    pub base_rates: BipRates,

    // === Power ===
    /// Probability mass moved into extra-base hits at power 100 is half of this (default: 0.10)
    pub power_swing: f64,
    /// Share of the power shift landing on home runs (default: 0.6)
    pub power_hr_weight: f64,
    /// Share landing on doubles (default: 0.3)
    pub power_double_weight: f64,
    /// Share landing on triples (default: 0.1)
    pub power_triple_weight: f64,
    /// Share of the compensation taken from singles; the rest comes from outs (default: 0.5)
    pub power_single_share: f64,

    // === Stuff ===
    /// Out-probability shift at stuff 100 is half of this (default: 0.10)
    pub stuff_swing: f64,
}

impl Default for BipConfig {
    fn default() -> Self {
        Self {
            base_rates: BipRates {
                out: 0.700,
                single: 0.190,
                double: 0.065,
                triple: 0.007,
                home_run: 0.038,
            },
            power_swing: 0.10,
            power_hr_weight: 0.6,
            power_double_weight: 0.3,
            power_triple_weight: 0.1,
            power_single_share: 0.5,
            stuff_swing: 0.10,
        }
    }
}
