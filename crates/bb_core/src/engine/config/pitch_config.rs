//! Pitch/count model parameters

use serde::{Deserialize, Serialize};

/// Pitch-by-pitch probability model.
///
/// Rating slopes are per rating point away from the neutral 50.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchConfig {
    // === Hit by pitch ===
    /// Per-pitch HBP probability, count independent (default: 0.008)
    pub hbp_rate: f64,

    // === Zone ===
    /// In-zone rate for a neutral-control pitcher (default: 0.50)
    pub zone_base: f64,
    /// Zone rate change per control point (default: 0.003)
    pub control_slope: f64,

    // === Swing ===
    /// Swing rate on in-zone pitches (default: 0.68)
    pub in_zone_swing: f64,
    /// Chase rate for a neutral-patience batter (default: 0.30)
    pub chase_base: f64,
    /// Chase rate reduction per patience point (default: 0.004)
    pub patience_slope: f64,

    // === Contact ===
    /// Contact rate at neutral contact/stuff (default: 0.78)
    pub contact_base: f64,
    /// Contact change per batter contact point (default: 0.004)
    pub contact_slope: f64,
    /// Contact change per pitcher stuff point (default: 0.004)
    pub stuff_slope: f64,
    /// Count adjustments to contact rate
    pub count_adjust: CountAdjust,

    // === Foul vs in play ===
    /// Foul share of contact with fewer than two strikes (default: 0.38)
    pub foul_rate: f64,
    /// Foul share of contact with two strikes (default: 0.46)
    pub foul_rate_two_strikes: f64,
}

/// Contact-rate adjustments keyed by count. Positive favors the batter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountAdjust {
    pub three_oh: f64,
    pub two_oh: f64,
    pub three_one: f64,
    pub two_one: f64,
    pub one_two: f64,
    pub oh_two: f64,
    pub full: f64,
}

impl Default for CountAdjust {
    fn default() -> Self {
        Self {
            three_oh: 0.08,
            two_oh: 0.05,
            three_one: 0.05,
            two_one: 0.02,
            one_two: -0.03,
            oh_two: -0.06,
            full: 0.0,
        }
    }
}

impl CountAdjust {
    pub fn for_count(&self, balls: u8, strikes: u8) -> f64 {
        match (balls, strikes) {
            (3, 0) => self.three_oh,
            (2, 0) => self.two_oh,
            (3, 1) => self.three_one,
            (2, 1) => self.two_one,
            (1, 2) => self.one_two,
            (0, 2) => self.oh_two,
            (3, 2) => self.full,
            _ => 0.0,
        }
    }
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            hbp_rate: 0.008,
            zone_base: 0.50,
            control_slope: 0.003,
            in_zone_swing: 0.68,
            chase_base: 0.30,
            patience_slope: 0.004,
            contact_base: 0.78,
            contact_slope: 0.004,
            stuff_slope: 0.004,
            count_adjust: CountAdjust::default(),
            foul_rate: 0.38,
            foul_rate_two_strikes: 0.46,
        }
    }
}

impl PitchConfig {
    pub(super) fn probabilities(&self) -> [(&'static str, f64); 6] {
        [
            ("pitch.hbp_rate", self.hbp_rate),
            ("pitch.zone_base", self.zone_base),
            ("pitch.in_zone_swing", self.in_zone_swing),
            ("pitch.chase_base", self.chase_base),
            ("pitch.foul_rate", self.foul_rate),
            ("pitch.foul_rate_two_strikes", self.foul_rate_two_strikes),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_adjust_favors_hitter_counts() {
        let adj = CountAdjust::default();
        assert!(adj.for_count(3, 0) > adj.for_count(2, 0));
        assert!(adj.for_count(2, 0) > 0.0);
        assert!(adj.for_count(0, 2) < adj.for_count(1, 2));
        assert_eq!(adj.for_count(3, 2), 0.0);
        assert_eq!(adj.for_count(1, 1), 0.0);
    }
}
