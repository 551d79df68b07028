//! Plate-appearance engine
//!
//! Leaves first: pitch/count engine → ball-in-play sampler → runner
//! advancement → state engine. Only `apply` touches `GameState`.

pub mod advancement;
pub mod apply;
pub mod bases;
pub mod bip;
pub mod config;
pub mod count;
pub mod pitch;
pub mod ratings;
pub mod rng;
pub mod state;

pub use advancement::{OutcomeTag, PaResolution, PlateOutcome, RunnerAdvancement, RunnerMove};
pub use apply::{apply, ApplyResult, HalfSummary};
pub use bases::BaseState;
pub use bip::{BipOutcome, BipSampler};
pub use config::ModelConfig;
pub use count::{Count, FinalCount};
pub use pitch::{AtBatResult, PitchEngine, PitchEvent, PitchKind, Terminal, MAX_PITCHES};
pub use ratings::{BatterRatings, PitcherRatings};
pub use rng::{RandomSource, ScriptedRng, SeededRng};
pub use state::{GameState, Half, TeamSide, TeamTotals};
