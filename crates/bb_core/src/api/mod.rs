pub mod json_api;

pub use json_api::{error_codes, simulate_game_json, GameRequest, GameResponse};
