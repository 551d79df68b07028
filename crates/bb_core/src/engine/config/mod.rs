//! # Model Configuration
//!
//! All tuning constants for the plate-appearance model live here instead of
//! being scattered through the engine as magic numbers.
//!
//! ## Presets
//!
//! | Preset | Description |
//! |--------|-------------|
//! | `realistic` | Default tuning |
//! | `high_offense` | Weaker control, livelier contact |
//! | `pitchers_duel` | Sharper control and stuff, fewer extra-base hits |
//!
//! ## Usage
//! ```rust
//! use bb_core::engine::config::ModelConfig;
//!
//! let config = ModelConfig::default();
//! let duel = ModelConfig::pitchers_duel();
//! assert!(duel.validate().is_ok());
//! ```
//!
//! ## Environment Variables
//!
//! - `BB_MODEL_PRESET`: Select preset (realistic, high_offense, pitchers_duel)

mod advancement_config;
mod bip_config;
mod pitch_config;

pub use advancement_config::AdvancementConfig;
pub use bip_config::{BipConfig, BipRates};
pub use pitch_config::{CountAdjust, PitchConfig};

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{EngineError, Result};

/// Full model configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ModelConfig {
    /// Pitch/count model
    #[serde(default)]
    pub pitch: PitchConfig,
    /// Ball-in-play outcome model
    #[serde(default)]
    pub bip: BipConfig,
    /// Reach-on-error / double-play / sac-fly rolls
    #[serde(default)]
    pub advancement: AdvancementConfig,
}

impl ModelConfig {
    pub fn realistic() -> Self {
        Self::default()
    }

    pub fn high_offense() -> Self {
        let mut cfg = Self::default();
        cfg.pitch.zone_base = 0.47;
        cfg.pitch.contact_base = 0.82;
        cfg.bip.base_rates = BipRates {
            out: 0.670,
            single: 0.205,
            double: 0.072,
            triple: 0.008,
            home_run: 0.045,
        };
        cfg.advancement.reach_on_error_rate = 0.025;
        cfg
    }

    pub fn pitchers_duel() -> Self {
        let mut cfg = Self::default();
        cfg.pitch.zone_base = 0.53;
        cfg.pitch.contact_base = 0.74;
        cfg.bip.base_rates = BipRates {
            out: 0.725,
            single: 0.180,
            double: 0.060,
            triple: 0.005,
            home_run: 0.030,
        };
        cfg.advancement.double_play_rate = 0.18;
        cfg
    }

    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "realistic" | "default" => Some(Self::realistic()),
            "high_offense" | "high-offense" => Some(Self::high_offense()),
            "pitchers_duel" | "pitchers-duel" => Some(Self::pitchers_duel()),
            _ => None,
        }
    }

    /// Load from `BB_MODEL_PRESET` or use default
    pub fn from_env_or_default() -> Self {
        env::var("BB_MODEL_PRESET")
            .ok()
            .and_then(|name| Self::from_preset(&name))
            .unwrap_or_default()
    }

    /// Parse and validate a JSON config document. Missing sections fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let probabilities =
            self.pitch.probabilities().into_iter().chain(self.advancement.probabilities());
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        let rates = self.bip.base_rates;
        if rates.as_array().iter().any(|r| *r < 0.0) {
            return Err(EngineError::InvalidConfig("bip.base_rates must be non-negative".into()));
        }
        let sum = rates.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(EngineError::InvalidConfig(format!(
                "bip.base_rates must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}
