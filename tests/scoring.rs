use std::fs;
use std::path::PathBuf;

use wc_predictor::league::League;
use wc_predictor::score::Score;

fn fixture_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

fn load() -> League {
    League::load_csv(&fixture_path("three_fixtures.csv")).expect("fixture file should load")
}

#[test]
fn players_score_exact_and_correct_results() {
    let league = load();
    let book = league.predictions();

    let sam = book.get("Sam").expect("sam column");
    let sam_points: Vec<Option<u32>> = sam.predictions.iter().map(|p| p.points).collect();
    assert_eq!(sam_points, vec![Some(3), Some(1), Some(3)]);
    assert_eq!(sam.total, 7);

    let lee = book.get("Lee").expect("lee column");
    let lee_points: Vec<Option<u32>> = lee.predictions.iter().map(|p| p.points).collect();
    assert_eq!(lee_points, vec![Some(1), Some(3), Some(1)]);
    assert_eq!(lee.total, 5);
    assert_eq!(lee.predictions[2].score, Score::new(0, 1));
}

#[test]
fn leaderboard_orders_players_by_total() {
    let league = load();
    let board = league.leaderboard("Cup", 10);
    let rows: Vec<(&str, u64)> = board
        .entries()
        .iter()
        .map(|e| (e.name.as_str(), e.score))
        .collect();
    assert_eq!(rows, vec![("Sam", 7), ("Lee", 5)]);
}

#[test]
fn team_aggregates_match_results() {
    let league = load();
    let teams = league.teams();

    let a = teams.find("A").expect("team A");
    assert_eq!((a.won, a.drawn, a.lost), (1, 1, 0));
    assert_eq!((a.goals_for, a.goals_against), (2, 1));
    assert_eq!(a.points(), 4);

    let b = teams.find("B").expect("team B");
    assert_eq!((b.won, b.drawn, b.lost), (0, 0, 2));
    assert_eq!((b.goals_for, b.goals_against), (2, 5));
    assert_eq!(b.points(), 0);

    let c = teams.find("C").expect("team C");
    assert_eq!((c.won, c.drawn, c.lost), (1, 1, 0));
    assert_eq!((c.goals_for, c.goals_against), (3, 1));

    for team in teams.iter() {
        assert_eq!(team.points(), team.won * 3 + team.drawn);
    }
}

#[test]
fn group_table_is_reproducible() {
    let league = load();
    let order: Vec<&str> = league
        .group_standings("A")
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    // C and A level on points; C has the better goal difference.
    assert_eq!(order, vec!["C", "A", "B"]);

    let again = load();
    let repeat: Vec<&str> = again
        .group_standings("A")
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(order, repeat);
}

#[test]
fn missing_and_malformed_predictions_score_zero() {
    let raw = fs::read_to_string(fixture_path("three_fixtures.csv")).expect("readable");
    let mut lines: Vec<String> = raw.lines().map(str::to_string).collect();
    lines[0].push_str(",Kim");
    lines[1].push_str(",");
    lines[2].push_str(",nil-nil");
    lines[3].push_str(",1:3");
    let league = League::from_reader(lines.join("\n").as_bytes()).expect("still loads");

    let kim = league.predictions().get("Kim").expect("kim column");
    assert_eq!(kim.total, 3);
    assert_eq!(kim.predictions[0].score, Score::Unset);
    assert_eq!(kim.predictions[1].score, Score::Unset);
    // Other players are unaffected.
    assert_eq!(league.predictions().get("Sam").map(|p| p.total), Some(7));
}
