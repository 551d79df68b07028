//! Ball/strike count state machine

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

pub const MAX_BALLS: u8 = 3;
pub const MAX_STRIKES: u8 = 2;

/// Live count within a plate appearance. Always `0..=3` balls, `0..=2` strikes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "FinalCount", into = "FinalCount")]
pub struct Count {
    balls: u8,
    strikes: u8,
}

/// Result of adding a ball or strike to a live count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountStep {
    Continue(Count),
    Walk,
    Strikeout,
}

impl Count {
    pub fn new(balls: u8, strikes: u8) -> Result<Self> {
        if balls > MAX_BALLS || strikes > MAX_STRIKES {
            return Err(EngineError::InvalidCount { balls, strikes });
        }
        Ok(Self { balls, strikes })
    }

    pub fn balls(&self) -> u8 {
        self.balls
    }

    pub fn strikes(&self) -> u8 {
        self.strikes
    }

    pub fn two_strikes(&self) -> bool {
        self.strikes == MAX_STRIKES
    }

    pub fn with_ball(self) -> CountStep {
        if self.balls == MAX_BALLS {
            CountStep::Walk
        } else {
            CountStep::Continue(Self { balls: self.balls + 1, ..self })
        }
    }

    pub fn with_strike(self) -> CountStep {
        if self.strikes == MAX_STRIKES {
            CountStep::Strikeout
        } else {
            CountStep::Continue(Self { strikes: self.strikes + 1, ..self })
        }
    }

    /// A foul never produces the third strike.
    pub fn with_foul(self) -> Count {
        if self.strikes < MAX_STRIKES {
            Self { strikes: self.strikes + 1, ..self }
        } else {
            self
        }
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.balls, self.strikes)
    }
}

/// Tally at the end of a plate appearance. Unlike `Count` this may read
/// 4 balls (walk) or 3 strikes (strikeout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FinalCount {
    pub balls: u8,
    pub strikes: u8,
}

impl From<Count> for FinalCount {
    fn from(count: Count) -> Self {
        Self { balls: count.balls, strikes: count.strikes }
    }
}

impl TryFrom<FinalCount> for Count {
    type Error = EngineError;

    fn try_from(raw: FinalCount) -> Result<Self> {
        Count::new(raw.balls, raw.strikes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_counts() {
        assert_eq!(Count::new(4, 0), Err(EngineError::InvalidCount { balls: 4, strikes: 0 }));
        assert!(Count::new(0, 3).is_err());
        assert!(Count::new(3, 2).is_ok());
    }

    #[test]
    fn test_fourth_ball_walks() {
        let count = Count::new(3, 1).unwrap();
        assert_eq!(count.with_ball(), CountStep::Walk);
        assert_eq!(Count::default().with_ball(), CountStep::Continue(Count::new(1, 0).unwrap()));
    }

    #[test]
    fn test_third_strike_strikes_out() {
        let count = Count::new(0, 2).unwrap();
        assert_eq!(count.with_strike(), CountStep::Strikeout);
    }

    #[test]
    fn test_foul_with_two_strikes_holds() {
        let count = Count::new(1, 2).unwrap();
        assert_eq!(count.with_foul(), count);
        assert_eq!(Count::default().with_foul(), Count::new(0, 1).unwrap());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Count = serde_json::from_str(r#"{"balls":2,"strikes":1}"#).unwrap();
        assert_eq!(ok.to_string(), "2-1");
        assert!(serde_json::from_str::<Count>(r#"{"balls":4,"strikes":1}"#).is_err());
    }
}
