//! Lineups and rating generation

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};

use crate::engine::ratings::{BatterRatings, PitcherRatings, RATING_NEUTRAL};
use crate::engine::rng::SeededRng;
use crate::engine::state::LINEUP_SIZE;
use crate::error::Result;

const RATING_SD: f64 = 12.0;
const RATING_FLOOR: f64 = 20.0;
const RATING_CEIL: f64 = 95.0;

const SURNAMES: &[&str] = &[
    "Alvarez", "Baker", "Castillo", "Dunn", "Ellis", "Foster", "Garcia", "Hughes", "Ito",
    "Jensen", "Kim", "Lopez", "Moreno", "Nash", "Ortiz", "Park", "Quinn", "Reyes", "Sato",
    "Turner", "Ueda", "Vargas", "Walsh", "Young",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batter {
    pub name: String,
    pub ratings: BatterRatings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pitcher {
    pub name: String,
    pub ratings: PitcherRatings,
}

/// Nine batters in batting order plus the pitcher who goes the distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    pub name: String,
    pub batters: [Batter; LINEUP_SIZE as usize],
    pub pitcher: Pitcher,
}

/// Normal around league average, clamped so no rating is absurd.
fn draw_rating(rng: &mut SeededRng) -> u8 {
    let z: f64 = StandardNormal.sample(rng.inner_mut());
    (RATING_NEUTRAL as f64 + z * RATING_SD).clamp(RATING_FLOOR, RATING_CEIL).round() as u8
}

fn draw_name(rng: &mut SeededRng) -> String {
    let idx = rng.inner_mut().gen_range(0..SURNAMES.len());
    SURNAMES[idx].to_string()
}

impl Lineup {
    /// Random lineup drawn from the game's own stream.
    pub fn generate(name: &str, rng: &mut SeededRng) -> Self {
        let batters = std::array::from_fn(|_| {
            let name = draw_name(rng);
            let ratings = BatterRatings {
                contact: draw_rating(rng),
                power: draw_rating(rng),
                patience: draw_rating(rng),
                speed: draw_rating(rng),
            };
            Batter { name, ratings }
        });
        let pitcher = Pitcher {
            name: draw_name(rng),
            ratings: PitcherRatings {
                control: draw_rating(rng),
                stuff: draw_rating(rng),
                velocity: draw_rating(rng),
                stamina: draw_rating(rng),
            },
        };
        Self { name: name.to_string(), batters, pitcher }
    }

    /// League-average lineup; useful as a neutral baseline.
    pub fn average(name: &str) -> Self {
        let batters = std::array::from_fn(|slot| Batter {
            name: format!("{name} {}", slot + 1),
            ratings: BatterRatings::average(),
        });
        let pitcher =
            Pitcher { name: format!("{name} P"), ratings: PitcherRatings::average() };
        Self { name: name.to_string(), batters, pitcher }
    }

    pub fn validate(&self) -> Result<()> {
        for batter in &self.batters {
            batter.ratings.validate()?;
        }
        self.pitcher.ratings.validate()
    }

    pub fn batter(&self, slot: u8) -> &Batter {
        &self.batters[slot as usize % LINEUP_SIZE as usize]
    }
}
