//! Play-by-play text built from runner movements

use crate::engine::advancement::{OutcomeTag, PaResolution, RunnerMove};
use crate::engine::bases::{FIRST, HOME, SECOND, SCORED, THIRD};

fn base_name(base: u8) -> &'static str {
    match base {
        FIRST => "first",
        SECOND => "second",
        THIRD => "third",
        SCORED => "home",
        _ => "the plate",
    }
}

fn verb(tag: OutcomeTag) -> &'static str {
    match tag {
        OutcomeTag::Strikeout => "strikes out",
        OutcomeTag::Walk => "walks",
        OutcomeTag::HitByPitch => "is hit by a pitch",
        OutcomeTag::Single => "singles",
        OutcomeTag::Double => "doubles",
        OutcomeTag::Triple => "triples",
        OutcomeTag::HomeRun => "homers",
        OutcomeTag::Out => "is retired on a ball in play",
        OutcomeTag::DoublePlay => "grounds into a double play",
        OutcomeTag::SacFly => "hits a sacrifice fly",
        OutcomeTag::ReachedOnError => "reaches on an error",
    }
}

fn runner_clause(mv: &RunnerMove) -> String {
    let from = base_name(mv.from);
    if mv.put_out {
        format!("runner from {from} out at {}", base_name(mv.to))
    } else if mv.scored {
        format!("runner from {from} scores")
    } else {
        format!("runner from {from} to {}", base_name(mv.to))
    }
}

/// One sentence describing the play.
///
/// `runs_credited` is the count after walk-off clamping; scoring runners past
/// it are dropped from the text since their runs never counted.
pub fn narrate(batter: &str, resolution: &PaResolution, runs_credited: u32) -> String {
    let mut text = format!("{batter} {}", verb(resolution.tag));

    let mut scorers_left = runs_credited;
    let clauses: Vec<String> = resolution
        .movements
        .iter()
        .filter(|mv| mv.from != HOME)
        .filter(|mv| {
            if !mv.scored {
                return true;
            }
            if scorers_left == 0 {
                return false;
            }
            scorers_left -= 1;
            true
        })
        .map(runner_clause)
        .collect();

    if !clauses.is_empty() {
        text.push_str("; ");
        text.push_str(&clauses.join(", "));
    }
    match runs_credited {
        0 => {}
        1 => text.push_str(" (1 run)"),
        n => text.push_str(&format!(" ({n} runs)")),
    }
    text.push('.');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::advancement::{PlateOutcome, RunnerAdvancement};
    use crate::engine::bases::BaseState;
    use crate::engine::bip::BipOutcome;
    use crate::engine::config::AdvancementConfig;
    use crate::engine::rng::ScriptedRng;

    fn resolve(outcome: PlateOutcome, bases: BaseState, outs: u8, script: &[f64]) -> PaResolution {
        let cfg = AdvancementConfig::default();
        let mut rng = ScriptedRng::new(script.iter().copied());
        RunnerAdvancement::new(&cfg).resolve(outcome, bases, outs, &mut rng).unwrap()
    }

    #[test]
    fn test_strikeout_has_no_runner_text() {
        let res = resolve(PlateOutcome::Strikeout, BaseState::new(true, false, false), 0, &[]);
        assert_eq!(narrate("Ortiz", &res, 0), "Ortiz strikes out.");
    }

    #[test]
    fn test_double_describes_runners() {
        let res = resolve(
            PlateOutcome::InPlay(BipOutcome::Double),
            BaseState::new(true, true, false),
            0,
            &[],
        );
        assert_eq!(
            narrate("Kim", &res, 1),
            "Kim doubles; runner from second scores, runner from first to third (1 run)."
        );
    }

    #[test]
    fn test_double_play_names_the_out() {
        let res = resolve(
            PlateOutcome::InPlay(BipOutcome::Out),
            BaseState::new(true, false, false),
            0,
            &[0.99, 0.0],
        );
        assert_eq!(
            narrate("Park", &res, 0),
            "Park grounds into a double play; runner from first out at second."
        );
    }

    #[test]
    fn test_walkoff_clamp_drops_extra_scorers() {
        let res = resolve(PlateOutcome::InPlay(BipOutcome::Triple), BaseState::LOADED, 0, &[]);
        let text = narrate("Sato", &res, 1);
        assert_eq!(text, "Sato triples; runner from third scores (1 run).");
    }
}
