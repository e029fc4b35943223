use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::fixture::DATE_FORMAT;
use crate::league::League;
use crate::leaderboard::Leaderboard;

pub struct ExportReport {
    pub standings: usize,
    pub results: usize,
    pub predictions: usize,
    pub scores: usize,
}

pub fn export_workbook(path: &Path, league: &League, board: &Leaderboard) -> Result<ExportReport> {
    let mut standings_rows = vec![vec![
        "Group".to_string(),
        "Team".to_string(),
        "Played".to_string(),
        "Won".to_string(),
        "Drawn".to_string(),
        "Lost".to_string(),
        "GoalsFor".to_string(),
        "GoalsAgainst".to_string(),
        "GoalDiff".to_string(),
        "Points".to_string(),
    ]];
    for group in league.groups().keys() {
        for team in league.group_standings(group) {
            standings_rows.push(vec![
                group.clone(),
                team.name.clone(),
                team.played().to_string(),
                team.won.to_string(),
                team.drawn.to_string(),
                team.lost.to_string(),
                team.goals_for.to_string(),
                team.goals_against.to_string(),
                team.goal_diff().to_string(),
                team.points().to_string(),
            ]);
        }
    }

    let teams = league.teams();
    let mut result_rows = vec![vec![
        "Group".to_string(),
        "Date".to_string(),
        "TeamA".to_string(),
        "TeamB".to_string(),
        "Score".to_string(),
    ]];
    for fixture in league.results() {
        result_rows.push(vec![
            fixture.group.clone(),
            fixture.when.format(DATE_FORMAT).to_string(),
            teams.name(fixture.team_a).to_string(),
            teams.name(fixture.team_b).to_string(),
            fixture.score.to_string(),
        ]);
    }

    let mut prediction_rows = vec![vec![
        "Player".to_string(),
        "Group".to_string(),
        "Date".to_string(),
        "TeamA".to_string(),
        "TeamB".to_string(),
        "Predicted".to_string(),
        "Actual".to_string(),
        "Points".to_string(),
    ]];
    for player in league.predictions().players() {
        for (actual, guess) in player.scored(league.fixtures()) {
            prediction_rows.push(vec![
                player.name.clone(),
                guess.group.clone(),
                guess.when.format(DATE_FORMAT).to_string(),
                teams.name(guess.team_a).to_string(),
                teams.name(guess.team_b).to_string(),
                guess.score.to_string(),
                actual.score.to_string(),
                opt_to_string(guess.points),
            ]);
        }
    }

    let mut score_rows = vec![vec![
        "Rank".to_string(),
        "Player".to_string(),
        "Score".to_string(),
    ]];
    for (idx, entry) in board.entries().iter().enumerate() {
        score_rows.push(vec![
            (idx + 1).to_string(),
            entry.name.clone(),
            entry.score.to_string(),
        ]);
    }

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Standings")?;
        write_rows(sheet, &standings_rows)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Results")?;
        write_rows(sheet, &result_rows)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Predictions")?;
        write_rows(sheet, &prediction_rows)?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Scores")?;
        write_rows(sheet, &score_rows)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;

    Ok(ExportReport {
        standings: standings_rows.len().saturating_sub(1),
        results: result_rows.len().saturating_sub(1),
        predictions: prediction_rows.len().saturating_sub(1),
        scores: score_rows.len().saturating_sub(1),
    })
}

fn opt_to_string<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::export_workbook;
    use crate::league::League;

    #[test]
    fn writes_every_sheet() {
        let raw = "\
Group,TeamA,TeamB,When,Score,Sam,Lee
A,A,B,14/06/2018,2:1,2:1,1:0
A,A,C,15/06/2018,,1:1,0:0
";
        let league = League::from_reader(raw.as_bytes()).expect("sample loads");
        let board = league.leaderboard("Cup", 10);
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out.xlsx");

        let report = export_workbook(&path, &league, &board).expect("export");
        assert_eq!(report.standings, 3);
        assert_eq!(report.results, 1);
        assert_eq!(report.predictions, 4);
        assert_eq!(report.scores, 2);
        assert!(path.exists());
    }
}
