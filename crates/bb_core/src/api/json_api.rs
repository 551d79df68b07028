use serde::{Deserialize, Serialize};

use crate::engine::config::ModelConfig;
use crate::engine::rng::SeededRng;
use crate::engine::state::TeamSide;
use crate::error::EngineError;
use crate::game::{GameRecord, GameSimulator, Lineup, PlayLog};
use crate::stats::{BoxScore, LineScore};
use crate::SCHEMA_VERSION;

pub mod error_codes {
    pub const INVALID_JSON: &str = "INVALID_JSON";
    pub const UNSUPPORTED_SCHEMA: &str = "UNSUPPORTED_SCHEMA";
    pub const UNKNOWN_PRESET: &str = "UNKNOWN_PRESET";
    pub const INVALID_CONFIG: &str = "INVALID_CONFIG";
    pub const INVALID_LINEUP: &str = "INVALID_LINEUP";
    pub const SIMULATION_FAILED: &str = "SIMULATION_FAILED";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

fn engine_err_code(err: &EngineError) -> &'static str {
    match err {
        EngineError::InvalidConfig(_) | EngineError::ConfigParse(_) => error_codes::INVALID_CONFIG,
        EngineError::InvalidRating { .. } => error_codes::INVALID_LINEUP,
        _ => error_codes::SIMULATION_FAILED,
    }
}

#[derive(Debug, Deserialize)]
pub struct GameRequest {
    pub schema_version: u8,
    pub seed: u64,
    /// Full model override. Takes precedence over `preset`.
    #[serde(default)]
    pub config: Option<ModelConfig>,
    /// "realistic" | "high_offense" | "pitchers_duel"
    #[serde(default)]
    pub preset: Option<String>,
    /// Generated from the seed when absent (away first, then home).
    #[serde(default)]
    pub home: Option<Lineup>,
    #[serde(default)]
    pub away: Option<Lineup>,
    #[serde(default)]
    pub include_plays: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub away_name: String,
    pub home_name: String,
    pub away_runs: u32,
    pub home_runs: u32,
    pub innings: u32,
    pub winner: Option<TeamSide>,
    pub walkoff: bool,
    pub skipped_bottom_half: bool,
    pub line_score: LineScore,
    pub box_score: BoxScore,
    /// SHA-256 of the canonical play log
    pub digest: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plays: Option<PlayLog>,
}

impl GameResponse {
    fn from_record(record: GameRecord, seed: u64, include_plays: bool) -> Result<Self, String> {
        let digest = record.digest().map_err(|e| err_code(error_codes::SIMULATION_FAILED, e))?;
        Ok(Self {
            schema_version: SCHEMA_VERSION,
            seed,
            walkoff: record.ended_on_walkoff(),
            skipped_bottom_half: record.skipped_bottom_half(),
            winner: record.winner(),
            innings: record.innings(),
            away_name: record.away.name,
            home_name: record.home.name,
            away_runs: record.final_state.away.runs,
            home_runs: record.final_state.home.runs,
            line_score: record.line_score,
            box_score: record.box_score,
            digest,
            plays: include_plays.then_some(record.plays),
        })
    }
}

fn resolve_config(config: Option<ModelConfig>, preset: Option<&str>) -> Result<ModelConfig, String> {
    match (config, preset) {
        (Some(cfg), _) => Ok(cfg),
        (None, Some(name)) => ModelConfig::from_preset(name)
            .ok_or_else(|| err_code(error_codes::UNKNOWN_PRESET, format!("unknown preset '{name}'"))),
        (None, None) => Ok(ModelConfig::default()),
    }
}

/// Simulates one game from a JSON request and returns the JSON response.
///
/// Errors are `CODE: message` strings (see [`error_codes`]).
pub fn simulate_game_json(request_json: &str) -> Result<String, String> {
    let request: GameRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_JSON, e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(err_code(
            error_codes::UNSUPPORTED_SCHEMA,
            format!("expected {SCHEMA_VERSION}, got {}", request.schema_version),
        ));
    }

    let GameRequest { seed, config, preset, home, away, include_plays, .. } = request;
    let config = resolve_config(config, preset.as_deref())?;
    let simulator =
        GameSimulator::new(config).map_err(|e| err_code(engine_err_code(&e), e))?;

    let mut rng = SeededRng::new(seed);
    let away = away.unwrap_or_else(|| Lineup::generate("Visitors", &mut rng));
    let home = home.unwrap_or_else(|| Lineup::generate("Home", &mut rng));

    let mut record =
        simulator.play(&home, &away, &mut rng).map_err(|e| err_code(engine_err_code(&e), e))?;
    record.seed = Some(seed);

    let response = GameResponse::from_record(record, seed, include_plays)?;
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SIMULATION_FAILED, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::simulate_seeded;
    use serde_json::json;

    fn call(request: serde_json::Value) -> Result<GameResponse, String> {
        let out = simulate_game_json(&request.to_string())?;
        Ok(serde_json::from_str(&out).unwrap())
    }

    #[test]
    fn test_minimal_request_matches_seeded_game() {
        let resp = call(json!({"schema_version": 1, "seed": 99})).unwrap();
        let game = simulate_seeded(ModelConfig::default(), 99).unwrap();
        assert_eq!(resp.digest, game.digest().unwrap());
        assert_eq!(resp.away_runs, game.final_state.away.runs);
        assert_eq!(resp.home_runs, game.final_state.home.runs);
        assert!(resp.plays.is_none());
    }

    #[test]
    fn test_include_plays() {
        let resp = call(json!({"schema_version": 1, "seed": 5, "include_plays": true})).unwrap();
        let plays = resp.plays.unwrap();
        assert!(!plays.is_empty());
        assert_eq!(plays.digest().unwrap(), resp.digest);
    }

    #[test]
    fn test_explicit_lineups() {
        let home = serde_json::to_value(Lineup::average("Sluggers")).unwrap();
        let away = serde_json::to_value(Lineup::average("Aces")).unwrap();
        let resp = call(json!({
            "schema_version": 1, "seed": 3, "home": home, "away": away, "preset": "high_offense"
        }))
        .unwrap();
        assert_eq!(resp.home_name, "Sluggers");
        assert_eq!(resp.away_name, "Aces");
        assert!(resp.winner.is_some());
    }

    #[test]
    fn test_error_codes() {
        let err = simulate_game_json("{not json").unwrap_err();
        assert!(err.starts_with("INVALID_JSON:"), "{err}");

        let err = call(json!({"schema_version": 2, "seed": 1})).unwrap_err();
        assert!(err.starts_with("UNSUPPORTED_SCHEMA:"), "{err}");

        let err = call(json!({"schema_version": 1, "seed": 1, "preset": "moonball"})).unwrap_err();
        assert!(err.starts_with("UNKNOWN_PRESET:"), "{err}");

        let mut config = serde_json::to_value(ModelConfig::default()).unwrap();
        config["advancement"]["double_play_rate"] = json!(2.0);
        let err = call(json!({"schema_version": 1, "seed": 1, "config": config})).unwrap_err();
        assert!(err.starts_with("INVALID_CONFIG:"), "{err}");

        let mut home = serde_json::to_value(Lineup::average("H")).unwrap();
        home["batters"][0]["ratings"]["contact"] = json!(200);
        let err = call(json!({"schema_version": 1, "seed": 1, "home": home})).unwrap_err();
        assert!(err.starts_with("INVALID_LINEUP:"), "{err}");
    }
}
