//! Game orchestration: lineups, the full-game loop, and the play log.

mod lineup;
mod narration;
mod play_log;
mod simulator;

pub use lineup::{Batter, Lineup, Pitcher};
pub use narration::narrate;
pub use play_log::{PlayLog, PlayRecord};
pub use simulator::{simulate_seeded, GameRecord, GameSimulator};
