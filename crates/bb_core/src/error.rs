use thiserror::Error;

use crate::engine::state::{Half, TeamSide};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid count: {balls} balls, {strikes} strikes")]
    InvalidCount { balls: u8, strikes: u8 },

    #[error("Invalid rating {field}: {value} (expected 0..=100)")]
    InvalidRating { field: &'static str, value: u8 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Inning cap exceeded: cannot advance past inning {max} (attempted {attempted})")]
    InningCapExceeded { attempted: u32, max: u32 },

    #[error("Third out recorded in {half:?} {inning} without a bases snapshot")]
    MissingThirdOutSnapshot { inning: u32, half: Half },

    #[error("Outs overflow: {outs} outs before play, {added} added")]
    OutsOverflow { outs: u8, added: u8 },

    #[error("Batting index {index} for {side:?} is outside the lineup")]
    BattingIndexOutOfRange { side: TeamSide, index: u8 },

    #[error("Game is already final")]
    GameAlreadyFinal,

    #[error("Inconsistent plate outcome: {0}")]
    InconsistentOutcome(String),

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl EngineError {
    /// Invariant violations abort the game; everything else is bad input.
    pub fn is_fatal(&self) -> bool {
        match self {
            EngineError::InningCapExceeded { .. } => true,
            EngineError::MissingThirdOutSnapshot { .. } => true,
            EngineError::OutsOverflow { .. } => true,
            EngineError::BattingIndexOutOfRange { .. } => true,
            EngineError::GameAlreadyFinal => true,
            EngineError::InconsistentOutcome(_) => true,
            EngineError::InvalidCount { .. } => false,
            EngineError::InvalidRating { .. } => false,
            EngineError::InvalidConfig(_) => false,
            EngineError::ConfigParse(_) => false,
            EngineError::Serialization(_) => false,
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
