//! # bb_core - Deterministic Baseball Plate-Appearance Engine
//!
//! Simulates a baseball game pitch by pitch and play by play from a single
//! seed, producing a replayable play log, the final score, and the box and
//! line scores derived from it.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same game, same digest)
//! - Pitch/count state machine driven by batter and pitcher ratings
//! - Rule-based runner advancement (double plays, sac flies, errors)
//! - Walk-off clamping, skipped bottom halves, extra innings
//! - JSON API for easy integration

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]
// Box-score recording takes the full credited line of a play
#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod engine;
pub mod error;
pub mod game;
pub mod stats;

// Re-export main API functions
pub use api::{simulate_game_json, GameRequest, GameResponse};
pub use error::{EngineError, Result};

// Re-export engine surface
pub use engine::{
    apply, ApplyResult, AtBatResult, BaseState, BatterRatings, BipOutcome, GameState, Half,
    ModelConfig, OutcomeTag, PaResolution, PitcherRatings, RandomSource, ScriptedRng, SeededRng,
    TeamSide,
};

// Re-export game orchestration
pub use game::{simulate_seeded, GameRecord, GameSimulator, Lineup, PlayLog, PlayRecord};
pub use stats::{BoxScore, LineScore, ScoreKeeper};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
