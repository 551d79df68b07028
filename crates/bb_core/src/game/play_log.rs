//! Play log and replay digest

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::engine::advancement::OutcomeTag;
use crate::engine::bip::BipOutcome;
use crate::engine::pitch::AtBatResult;
use crate::engine::state::Half;
use crate::error::{EngineError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub seq: u32,
    pub inning: u32,
    pub half: Half,
    pub batter: String,
    pub pitcher: String,
    pub at_bat: AtBatResult,
    pub bip: Option<BipOutcome>,
    pub tag: OutcomeTag,
    /// Credited runs (after walk-off clamping).
    pub runs: u32,
    pub rbi: u32,
    pub outs_after: u8,
    pub away_score: u32,
    pub home_score: u32,
    pub walkoff: bool,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayLog {
    plays: Vec<PlayRecord>,
}

impl PlayLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, play: PlayRecord) {
        self.plays.push(play);
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn plays(&self) -> &[PlayRecord] {
        &self.plays
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayRecord> {
        self.plays.iter()
    }

    pub fn last(&self) -> Option<&PlayRecord> {
        self.plays.last()
    }

    /// Compact JSON; field order follows the struct definitions.
    pub fn to_canonical_json(&self) -> Result<String> {
        serde_json::to_string(&self.plays).map_err(|e| EngineError::Serialization(e.to_string()))
    }

    /// SHA-256 hex of the canonical JSON. Equal seeds give equal digests.
    pub fn digest(&self) -> Result<String> {
        let json = self.to_canonical_json()?;
        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        let digest = hasher.finalize();
        Ok(digest.iter().map(|b| format!("{b:02x}")).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::count::FinalCount;
    use crate::engine::pitch::Terminal;

    fn strikeout(seq: u32) -> PlayRecord {
        PlayRecord {
            seq,
            inning: 1,
            half: Half::Top,
            batter: "Ellis".into(),
            pitcher: "Nash".into(),
            at_bat: AtBatResult {
                terminal: Terminal::Strikeout,
                final_count: FinalCount { balls: 0, strikes: 3 },
                pitch_count: 0,
                pitches: Vec::new(),
                forced_by_cap: false,
            },
            bip: None,
            tag: OutcomeTag::Strikeout,
            runs: 0,
            rbi: 0,
            outs_after: 1,
            away_score: 0,
            home_score: 0,
            walkoff: false,
            text: "Ellis strikes out.".into(),
        }
    }

    #[test]
    fn test_digest_is_hex_sha256() {
        let mut log = PlayLog::new();
        log.push(strikeout(1));
        let digest = log.digest().unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, log.clone().digest().unwrap());
    }

    #[test]
    fn test_digest_changes_with_content() {
        let mut a = PlayLog::new();
        a.push(strikeout(1));
        let mut b = a.clone();
        b.push(strikeout(2));
        assert_ne!(a.digest().unwrap(), b.digest().unwrap());
    }

    #[test]
    fn test_empty_log_digest() {
        // sha256("[]")
        assert_eq!(
            PlayLog::new().digest().unwrap(),
            "4f53cda18c2baa0c0354bb5f9a3ecbe5ed12ab4d8e11ba873c2f11161202b945"
        );
    }
}
