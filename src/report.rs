use std::fmt::Write;

use crate::error::{PredictorError, Result};
use crate::league::League;
use crate::team::Team;

const STANDINGS_COLUMNS: [&str; 8] = [
    "Played",
    "Won",
    "Drawn",
    "Lost",
    "GoalsFor",
    "GoalsAgainst",
    "GoalDiff",
    "Points",
];

pub fn teams(league: &League) -> String {
    let mut out = String::from("\nTeams\n");
    for team in league.teams().sorted_by_name() {
        let _ = writeln!(
            out,
            "\t{} (played {}, points {})",
            team.name,
            team.played(),
            team.points()
        );
    }
    out
}

pub fn groups(league: &League) -> String {
    let mut out = String::from("\nGroups\n");
    for group in league.groups().keys() {
        let _ = writeln!(out, "Group {group}:");
        out.push_str(&standings_table(&league.group_standings(group)));
    }
    out
}

pub fn standings_table(rows: &[&Team]) -> String {
    let name_width = rows
        .iter()
        .map(|t| t.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Team".len())
        + 2;

    let mut out = format!("\t{:<name_width$}", "Team");
    for col in STANDINGS_COLUMNS {
        let _ = write!(out, "{:>width$}", col, width = col.len() + 2);
    }
    out.push('\n');

    for team in rows {
        let values = [
            team.played().to_string(),
            team.won.to_string(),
            team.drawn.to_string(),
            team.lost.to_string(),
            team.goals_for.to_string(),
            team.goals_against.to_string(),
            format!("{:+}", team.goal_diff()),
            team.points().to_string(),
        ];
        let _ = write!(out, "\t{:<name_width$}", team.name);
        for (col, value) in STANDINGS_COLUMNS.iter().zip(values) {
            let _ = write!(out, "{:>width$}", value, width = col.len() + 2);
        }
        out.push('\n');
    }
    out
}

pub fn results(league: &League) -> String {
    let mut out = String::from("\nResults\n");
    for fixture in league.results() {
        let _ = writeln!(out, "{}", fixture.display(league.teams()));
    }
    out
}

pub fn predictions_for(league: &League, player: &str) -> Result<String> {
    let Some(entry) = league.predictions().get(player) else {
        return Err(PredictorError::data_missing(format!(
            "no predictions for player {player}"
        )));
    };
    let mut out = format!("Player {} predictions (total {})\n", entry.name, entry.total);
    for guess in &entry.predictions {
        let _ = writeln!(out, "{}", guess.display(league.teams()));
    }
    Ok(out)
}

pub fn full(league: &League) -> String {
    let mut out = teams(league);
    out.push_str(&groups(league));
    out.push_str(&results(league));
    out.push_str("\nPredictions\n");
    for player in league.predictions().players() {
        if let Ok(text) = predictions_for(league, &player.name) {
            out.push_str(&text);
        }
    }
    out
}
