//! Full-game loop
//!
//! pitch engine → BIP sampler → runner advancement → state engine, repeated
//! until the state engine marks the game final. One random source is threaded
//! through every call in that order.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::lineup::Lineup;
use super::narration::narrate;
use super::play_log::{PlayLog, PlayRecord};
use crate::engine::advancement::{PlateOutcome, RunnerAdvancement};
use crate::engine::apply::apply;
use crate::engine::bip::BipSampler;
use crate::engine::config::ModelConfig;
use crate::engine::pitch::{PitchEngine, Terminal};
use crate::engine::rng::{RandomSource, SeededRng};
use crate::engine::state::{GameState, TeamSide, REGULATION_INNINGS};
use crate::error::Result;
use crate::stats::{BoxScore, InningCell, LineScore, ScoreKeeper};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: Option<u64>,
    pub away: Lineup,
    pub home: Lineup,
    pub final_state: GameState,
    pub line_score: LineScore,
    pub box_score: BoxScore,
    pub plays: PlayLog,
}

impl GameRecord {
    pub fn winner(&self) -> Option<TeamSide> {
        self.final_state.winner()
    }

    pub fn innings(&self) -> u32 {
        self.final_state.inning
    }

    pub fn is_extra_innings(&self) -> bool {
        self.final_state.inning > REGULATION_INNINGS
    }

    pub fn ended_on_walkoff(&self) -> bool {
        self.plays.last().is_some_and(|p| p.walkoff)
    }

    /// Home half of the last inning was never played.
    pub fn skipped_bottom_half(&self) -> bool {
        self.line_score.home.innings.last() == Some(&InningCell::Skipped)
    }

    /// Runs / hits / errors for one team.
    pub fn rhe(&self, side: TeamSide) -> (u32, u32, u32) {
        let team_box = self.box_score.team(side);
        (self.final_state.runs(side), team_box.hits(), team_box.errors)
    }

    pub fn total_runs(&self) -> u32 {
        self.final_state.away.runs + self.final_state.home.runs
    }

    pub fn digest(&self) -> Result<String> {
        self.plays.digest()
    }
}

pub struct GameSimulator {
    config: ModelConfig,
}

impl GameSimulator {
    pub fn new(config: ModelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn play(
        &self,
        home: &Lineup,
        away: &Lineup,
        rng: &mut dyn RandomSource,
    ) -> Result<GameRecord> {
        home.validate()?;
        away.validate()?;

        let pitch_engine = PitchEngine::new(&self.config.pitch);
        let sampler = BipSampler::new(&self.config.bip);
        let resolver = RunnerAdvancement::new(&self.config.advancement);

        let mut state = GameState::new();
        let mut keeper = ScoreKeeper::new();
        let mut plays = PlayLog::new();
        let mut seq = 0u32;

        while !state.is_final {
            let offense = state.offense();
            let (batting, fielding) = match offense {
                TeamSide::Away => (away, home),
                TeamSide::Home => (home, away),
            };
            let batter = batting.batter(state.batting_index(offense));
            let pitcher = &fielding.pitcher;

            let at_bat = pitch_engine.simulate(&pitcher.ratings, &batter.ratings, rng);
            keeper.record_pitches(state.defense(), at_bat.pitch_count);

            let bip = match at_bat.terminal {
                Terminal::BallInPlay => {
                    Some(sampler.resolve(batter.ratings.power, pitcher.ratings.stuff, rng))
                }
                _ => None,
            };
            let outcome = PlateOutcome::from_parts(at_bat.terminal, bip)?;
            let resolution = resolver.resolve(outcome, state.bases, state.outs, rng)?;
            let applied = apply(&state, &resolution, &mut keeper)?;

            seq += 1;
            let mut text = narrate(&batter.name, &resolution, applied.runs_credited);
            if applied.is_walkoff {
                text.push_str(" Walk-off!");
            }
            plays.push(PlayRecord {
                seq,
                inning: state.inning,
                half: state.half,
                batter: batter.name.clone(),
                pitcher: pitcher.name.clone(),
                at_bat,
                bip,
                tag: resolution.tag,
                runs: applied.runs_credited,
                rbi: applied.rbi,
                outs_after: applied.outs_after,
                away_score: applied.state_after.away.runs,
                home_score: applied.state_after.home.runs,
                walkoff: applied.is_walkoff,
                text,
            });

            state = applied.state_after;
        }

        info!(
            away = %away.name,
            home = %home.name,
            away_runs = state.away.runs,
            home_runs = state.home.runs,
            innings = state.inning,
            plate_appearances = seq,
            "game complete"
        );

        Ok(GameRecord {
            seed: None,
            away: away.clone(),
            home: home.clone(),
            final_state: state,
            line_score: keeper.line_score,
            box_score: keeper.box_score,
            plays,
        })
    }
}

/// Generates both lineups and plays the game, all from one seed.
pub fn simulate_seeded(config: ModelConfig, seed: u64) -> Result<GameRecord> {
    let simulator = GameSimulator::new(config)?;
    let mut rng = SeededRng::new(seed);
    let away = Lineup::generate("Visitors", &mut rng);
    let home = Lineup::generate("Home", &mut rng);
    let mut record = simulator.play(&home, &away, &mut rng)?;
    record.seed = Some(seed);
    Ok(record)
}
