//! Player rating records (0-100 scale, 50 = league average)

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

pub const RATING_MAX: u8 = 100;
pub const RATING_NEUTRAL: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatterRatings {
    pub contact: u8,
    pub power: u8,
    pub patience: u8,
    pub speed: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitcherRatings {
    pub control: u8,
    pub stuff: u8,
    pub velocity: u8,
    pub stamina: u8,
}

fn check(field: &'static str, value: u8) -> Result<()> {
    if value > RATING_MAX {
        return Err(EngineError::InvalidRating { field, value });
    }
    Ok(())
}

impl BatterRatings {
    pub fn new(contact: u8, power: u8, patience: u8, speed: u8) -> Result<Self> {
        let r = Self { contact, power, patience, speed };
        r.validate()?;
        Ok(r)
    }

    pub fn average() -> Self {
        Self { contact: 50, power: 50, patience: 50, speed: 50 }
    }

    pub fn validate(&self) -> Result<()> {
        check("contact", self.contact)?;
        check("power", self.power)?;
        check("patience", self.patience)?;
        check("speed", self.speed)
    }
}

impl PitcherRatings {
    pub fn new(control: u8, stuff: u8, velocity: u8, stamina: u8) -> Result<Self> {
        let r = Self { control, stuff, velocity, stamina };
        r.validate()?;
        Ok(r)
    }

    pub fn average() -> Self {
        Self { control: 50, stuff: 50, velocity: 50, stamina: 50 }
    }

    pub fn validate(&self) -> Result<()> {
        check("control", self.control)?;
        check("stuff", self.stuff)?;
        check("velocity", self.velocity)?;
        check("stamina", self.stamina)
    }
}

/// Signed offset from the neutral rating, in rating points.
#[inline]
pub fn offset(rating: u8) -> f64 {
    rating as f64 - RATING_NEUTRAL as f64
}

/// Rating normalized to `[0, 1]`.
#[inline]
pub fn normalize(rating: u8) -> f64 {
    (rating.min(RATING_MAX) as f64) / RATING_MAX as f64
}
