//! Runner-advancement roll probabilities

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancementConfig {
    /// Reach-on-error chance on every ball-in-play out (default: 0.015)
    pub reach_on_error_rate: f64,
    /// Double-play chance with a runner on first and fewer than two outs (default: 0.15)
    pub double_play_rate: f64,
    /// Sacrifice-fly chance with a runner on third and fewer than two outs (default: 0.30)
    pub sac_fly_rate: f64,
}

impl Default for AdvancementConfig {
    fn default() -> Self {
        Self { reach_on_error_rate: 0.015, double_play_rate: 0.15, sac_fly_rate: 0.30 }
    }
}

impl AdvancementConfig {
    pub(super) fn probabilities(&self) -> [(&'static str, f64); 3] {
        [
            ("advancement.reach_on_error_rate", self.reach_on_error_rate),
            ("advancement.double_play_rate", self.double_play_rate),
            ("advancement.sac_fly_rate", self.sac_fly_rate),
        ]
    }
}
