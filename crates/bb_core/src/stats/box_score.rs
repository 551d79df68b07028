//! Box-score accumulation
//!
//! Counters are fed by the state engine with the *credited* runs and RBI of a
//! play (after walk-off clamping), never re-derived from raw draws.

use serde::{Deserialize, Serialize};

use crate::engine::advancement::{OutcomeTag, PaResolution};
use crate::engine::state::{TeamSide, LINEUP_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BattingLine {
    pub pa: u32,
    pub ab: u32,
    pub h: u32,
    pub doubles: u32,
    pub triples: u32,
    pub hr: u32,
    pub bb: u32,
    pub hbp: u32,
    pub so: u32,
    pub rbi: u32,
    pub sf: u32,
    pub roe: u32,
    pub gidp: u32,
}

impl BattingLine {
    pub fn total_bases(&self) -> u32 {
        let singles = self.h - self.doubles - self.triples - self.hr;
        singles + 2 * self.doubles + 3 * self.triples + 4 * self.hr
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PitchingLine {
    pub batters_faced: u32,
    pub outs: u32,
    pub h: u32,
    pub r: u32,
    pub er: u32,
    pub bb: u32,
    pub hbp: u32,
    pub so: u32,
    pub hr: u32,
    pub pitches: u32,
}

impl PitchingLine {
    /// Innings pitched in scorebook notation, e.g. `6.2`.
    pub fn innings_pitched(&self) -> String {
        format!("{}.{}", self.outs / 3, self.outs % 3)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamBox {
    pub batters: Vec<BattingLine>,
    pub pitcher: PitchingLine,
    pub errors: u32,
}

impl Default for TeamBox {
    fn default() -> Self {
        Self {
            batters: vec![BattingLine::default(); LINEUP_SIZE as usize],
            pitcher: PitchingLine::default(),
            errors: 0,
        }
    }
}

impl TeamBox {
    pub fn hits(&self) -> u32 {
        self.batters.iter().map(|b| b.h).sum()
    }

    pub fn totals(&self) -> BattingLine {
        self.batters.iter().fold(BattingLine::default(), |mut acc, b| {
            acc.pa += b.pa;
            acc.ab += b.ab;
            acc.h += b.h;
            acc.doubles += b.doubles;
            acc.triples += b.triples;
            acc.hr += b.hr;
            acc.bb += b.bb;
            acc.hbp += b.hbp;
            acc.so += b.so;
            acc.rbi += b.rbi;
            acc.sf += b.sf;
            acc.roe += b.roe;
            acc.gidp += b.gidp;
            acc
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoxScore {
    pub away: TeamBox,
    pub home: TeamBox,
}

impl BoxScore {
    pub fn team(&self, side: TeamSide) -> &TeamBox {
        match side {
            TeamSide::Away => &self.away,
            TeamSide::Home => &self.home,
        }
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut TeamBox {
        match side {
            TeamSide::Away => &mut self.away,
            TeamSide::Home => &mut self.home,
        }
    }

    pub fn record_plate_appearance(
        &mut self,
        offense: TeamSide,
        slot: u8,
        resolution: &PaResolution,
        runs: u32,
        earned: u32,
        rbi: u32,
    ) {
        let tag = resolution.tag;

        let batting = &mut self.team_mut(offense).batters[slot as usize];
        batting.pa += 1;
        if tag.is_at_bat() {
            batting.ab += 1;
        }
        if tag.is_hit() {
            batting.h += 1;
        }
        match tag {
            OutcomeTag::Double => batting.doubles += 1,
            OutcomeTag::Triple => batting.triples += 1,
            OutcomeTag::HomeRun => batting.hr += 1,
            OutcomeTag::Walk => batting.bb += 1,
            OutcomeTag::HitByPitch => batting.hbp += 1,
            OutcomeTag::Strikeout => batting.so += 1,
            OutcomeTag::SacFly => batting.sf += 1,
            OutcomeTag::ReachedOnError => batting.roe += 1,
            OutcomeTag::DoublePlay => batting.gidp += 1,
            OutcomeTag::Single | OutcomeTag::Out => {}
        }
        batting.rbi += rbi;

        let defense = self.team_mut(offense.other());
        if resolution.had_error {
            defense.errors += 1;
        }
        let pitching = &mut defense.pitcher;
        pitching.batters_faced += 1;
        pitching.outs += resolution.outs_added as u32;
        pitching.r += runs;
        pitching.er += earned;
        if tag.is_hit() {
            pitching.h += 1;
        }
        match tag {
            OutcomeTag::Walk => pitching.bb += 1,
            OutcomeTag::HitByPitch => pitching.hbp += 1,
            OutcomeTag::Strikeout => pitching.so += 1,
            OutcomeTag::HomeRun => pitching.hr += 1,
            _ => {}
        }
    }

    pub fn record_pitches(&mut self, defense: TeamSide, pitches: u32) {
        self.team_mut(defense).pitcher.pitches += pitches;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::advancement::{PlateOutcome, RunnerAdvancement};
    use crate::engine::bases::BaseState;
    use crate::engine::bip::BipOutcome;
    use crate::engine::config::AdvancementConfig;
    use crate::engine::rng::ScriptedRng;

    fn resolve(outcome: PlateOutcome, bases: BaseState) -> PaResolution {
        let cfg = AdvancementConfig::default();
        let mut rng = ScriptedRng::new([0.99, 0.0]);
        RunnerAdvancement::new(&cfg).resolve(outcome, bases, 0, &mut rng).unwrap()
    }

    #[test]
    fn test_home_run_credits_batter_and_pitcher() {
        let mut bs = BoxScore::default();
        let res = resolve(PlateOutcome::InPlay(BipOutcome::HomeRun), BaseState::new(true, false, false));
        bs.record_plate_appearance(TeamSide::Away, 3, &res, 2, 2, 2);

        let b = bs.away.batters[3];
        assert_eq!((b.pa, b.ab, b.h, b.hr, b.rbi), (1, 1, 1, 1, 2));
        assert_eq!(b.total_bases(), 4);
        let p = bs.home.pitcher;
        assert_eq!((p.batters_faced, p.h, p.r, p.er, p.hr), (1, 1, 2, 2, 1));
    }

    #[test]
    fn test_walk_and_sac_fly_are_not_at_bats() {
        let mut bs = BoxScore::default();
        let walk = resolve(PlateOutcome::Walk, BaseState::EMPTY);
        bs.record_plate_appearance(TeamSide::Home, 0, &walk, 0, 0, 0);
        let sf = resolve(PlateOutcome::InPlay(BipOutcome::Out), BaseState::new(false, false, true));
        assert_eq!(sf.tag, OutcomeTag::SacFly);
        bs.record_plate_appearance(TeamSide::Home, 0, &sf, 1, 1, 1);

        let b = bs.home.batters[0];
        assert_eq!((b.pa, b.ab, b.bb, b.sf, b.rbi), (2, 0, 1, 1, 1));
        assert_eq!(bs.away.pitcher.outs, 1);
        assert_eq!(bs.away.pitcher.innings_pitched(), "0.1");
    }

    #[test]
    fn test_team_totals_sum_lines() {
        let mut bs = BoxScore::default();
        let single = resolve(PlateOutcome::InPlay(BipOutcome::Single), BaseState::EMPTY);
        bs.record_plate_appearance(TeamSide::Away, 0, &single, 0, 0, 0);
        bs.record_plate_appearance(TeamSide::Away, 1, &single, 0, 0, 0);
        assert_eq!(bs.away.hits(), 2);
        assert_eq!(bs.away.totals().ab, 2);
        bs.record_pitches(TeamSide::Home, 7);
        assert_eq!(bs.home.pitcher.pitches, 7);
    }
}
