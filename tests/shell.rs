use std::fs;
use std::path::{Path, PathBuf};

use wc_predictor::config::Config;
use wc_predictor::leaderboard::FileStore;
use wc_predictor::shell::Shell;

fn config_for(dir: &Path) -> Config {
    let mut fixtures = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    fixtures.push("tests");
    fixtures.push("fixtures");
    fixtures.push("three_fixtures.csv");
    Config {
        fixtures_path: fixtures,
        leaderboard_dir: dir.to_path_buf(),
        leaderboard_name: "Cup".to_string(),
        leaderboard_size: 10,
        score_prefix: String::new(),
        export_path: dir.join("out.xlsx"),
    }
}

fn run_session(dir: &Path, script: &str) -> String {
    let config = config_for(dir);
    let store = FileStore::new(dir);
    let mut output = Vec::new();
    {
        let mut shell = Shell::new(config, store, script.as_bytes(), &mut output);
        shell.run().expect("session runs");
    }
    String::from_utf8(output).expect("utf8 output")
}

#[test]
fn commands_before_start_report_missing_data() {
    let dir = tempfile::tempdir().expect("temp dir");
    let out = run_session(dir.path(), "groups\npredictions\nscores\nquit\n");
    assert!(out.contains("Welcome to the World Cup Predictor."));
    assert_eq!(out.matches("no data:").count(), 2);
    assert!(out.contains("No high scores recorded."));
}

#[test]
fn session_loads_scores_and_persists() {
    let dir = tempfile::tempdir().expect("temp dir");
    let out = run_session(
        dir.path(),
        "start\nscores\npredictions\nx\n2\npredictions\n3\ngroups\nteams\nbogus\nquit\n",
    );
    assert!(out.contains("Loaded 3 fixtures, 3 teams, 2 players."));
    assert!(out.contains("1. Sam - 7"));
    assert!(out.contains("2. Lee - 5"));
    assert!(out.contains("Please enter a number between 1 and 3."));
    assert!(out.contains("Player Lee predictions (total 5)"));
    assert!(out.contains("selection cancelled"));
    assert!(out.contains("Group A:"));
    assert!(out.contains("Unknown command 'bogus'"));

    let saved = fs::read_to_string(dir.path().join("Cup.hst")).expect("leaderboard saved");
    assert!(saved.contains("Sam"));

    // Next session sees the saved table before loading anything.
    let out = run_session(dir.path(), "scores\n");
    assert!(out.contains("1. Sam - 7"));
}

#[test]
fn export_writes_workbook() {
    let dir = tempfile::tempdir().expect("temp dir");
    let out = run_session(dir.path(), "start\nexport\nquit\n");
    assert!(out.contains("Exported 3 standings, 3 results, 6 predictions, 2 scores"));
    assert!(dir.path().join("out.xlsx").exists());
}

#[test]
fn bad_fixture_path_keeps_the_loop_alive() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut config = config_for(dir.path());
    config.fixtures_path = dir.path().join("missing.csv");
    let mut output = Vec::new();
    {
        let store = FileStore::new(dir.path());
        let mut shell = Shell::new(config, store, "start\nhelp\n".as_bytes(), &mut output);
        shell.run().expect("session runs");
    }
    let out = String::from_utf8(output).expect("utf8 output");
    assert!(out.contains("failed to load"));
    assert!(out.contains("Commands:"));
}
