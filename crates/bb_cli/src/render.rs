//! Plain-text line score and box score

use std::fmt::Write;

use bb_core::stats::{TeamBox, TeamLine};
use bb_core::{GameRecord, Lineup, PlayLog, TeamSide};

fn line_row(out: &mut String, name: &str, line: &TeamLine, innings: usize, rhe: (u32, u32, u32)) {
    let _ = write!(out, "{name:<12}");
    for i in 0..innings {
        match line.innings.get(i) {
            Some(cell) => {
                let _ = write!(out, "{:>3}", cell.to_string());
            }
            None => out.push_str("   "),
        }
    }
    let (r, h, e) = rhe;
    let _ = writeln!(out, "  {r:>3}{h:>3}{e:>3}");
}

pub fn line_score(game: &GameRecord) -> String {
    let innings = game.line_score.innings_played();
    let mut out = String::new();
    let _ = write!(out, "{:<12}", "");
    for i in 1..=innings {
        let _ = write!(out, "{i:>3}");
    }
    let _ = writeln!(out, "  {:>3}{:>3}{:>3}", "R", "H", "E");

    for side in [TeamSide::Away, TeamSide::Home] {
        let lineup = team_lineup(game, side);
        let line = game.line_score.team(side);
        line_row(&mut out, &lineup.name, line, innings, game.rhe(side));
    }
    out
}

fn team_lineup(game: &GameRecord, side: TeamSide) -> &Lineup {
    match side {
        TeamSide::Away => &game.away,
        TeamSide::Home => &game.home,
    }
}

fn batting_table(out: &mut String, lineup: &Lineup, team_box: &TeamBox, lob: u32) {
    let _ = writeln!(
        out,
        "{:<14}{:>4}{:>4}{:>4}{:>4}{:>4}{:>4}{:>4}{:>4}",
        lineup.name, "PA", "AB", "H", "HR", "RBI", "BB", "SO", "TB"
    );
    for (batter, line) in lineup.batters.iter().zip(&team_box.batters) {
        let _ = writeln!(
            out,
            "  {:<12}{:>4}{:>4}{:>4}{:>4}{:>4}{:>4}{:>4}{:>4}",
            batter.name,
            line.pa,
            line.ab,
            line.h,
            line.hr,
            line.rbi,
            line.bb,
            line.so,
            line.total_bases()
        );
    }
    let t = team_box.totals();
    let _ = writeln!(
        out,
        "  {:<12}{:>4}{:>4}{:>4}{:>4}{:>4}{:>4}{:>4}{:>4}",
        "Totals",
        t.pa,
        t.ab,
        t.h,
        t.hr,
        t.rbi,
        t.bb,
        t.so,
        t.total_bases()
    );
    let _ = writeln!(out, "  LOB: {lob}");
}

fn pitching_row(out: &mut String, lineup: &Lineup, team_box: &TeamBox) {
    let p = &team_box.pitcher;
    let _ = writeln!(
        out,
        "  {:<12}{:>6}{:>4}{:>4}{:>4}{:>4}{:>4}{:>4}{:>5}",
        lineup.pitcher.name,
        p.innings_pitched(),
        p.h,
        p.r,
        p.er,
        p.bb,
        p.so,
        p.hr,
        p.pitches
    );
}

pub fn box_score(game: &GameRecord) -> String {
    let mut out = String::new();
    for side in [TeamSide::Away, TeamSide::Home] {
        let lob = game.line_score.team(side).total_lob();
        batting_table(&mut out, team_lineup(game, side), game.box_score.team(side), lob);
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "{:<14}{:>6}{:>4}{:>4}{:>4}{:>4}{:>4}{:>4}{:>5}",
        "Pitching", "IP", "H", "R", "ER", "BB", "SO", "HR", "NP"
    );
    for side in [TeamSide::Away, TeamSide::Home] {
        pitching_row(&mut out, team_lineup(game, side), game.box_score.team(side));
    }
    out
}

pub fn play_by_play(plays: &PlayLog) -> String {
    let mut out = String::new();
    let mut current = None;
    for play in plays.iter() {
        if current != Some((play.inning, play.half)) {
            current = Some((play.inning, play.half));
            let _ = writeln!(out, "-- {:?} {} --", play.half, play.inning);
        }
        let _ = writeln!(
            out,
            "  [{}-{}, {} out] {}",
            play.away_score, play.home_score, play.outs_after, play.text
        );
    }
    out
}

pub fn summary(game: &GameRecord) -> String {
    let state = &game.final_state;
    let mut text = format!(
        "Final: {} {}, {} {}",
        game.away.name, state.away.runs, game.home.name, state.home.runs
    );
    if game.is_extra_innings() {
        let _ = write!(text, " ({} innings)", game.innings());
    }
    if game.ended_on_walkoff() {
        text.push_str(" - walk-off");
    }
    text
}
