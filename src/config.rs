use std::path::PathBuf;

use crate::leaderboard::DEFAULT_MAX_SIZE;

const APP_DIR: &str = "wc_predictor";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub fixtures_path: PathBuf,
    pub leaderboard_dir: PathBuf,
    pub leaderboard_name: String,
    pub leaderboard_size: usize,
    pub score_prefix: String,
    pub export_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let fixtures_path = non_empty("WCP_FIXTURES")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data").join("fixtures.csv"));
        let leaderboard_dir = non_empty("WCP_LEADERBOARD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| default_store_dir(&lookup));
        let leaderboard_name = non_empty("WCP_LEADERBOARD_NAME")
            .unwrap_or_else(|| "World Cup Predictor".to_string());
        let leaderboard_size = non_empty("WCP_LEADERBOARD_SIZE")
            .and_then(|val| val.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_SIZE)
            .max(1);
        let score_prefix = lookup("WCP_SCORE_PREFIX").unwrap_or_default();
        let export_path = non_empty("WCP_EXPORT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("predictions.xlsx"));

        Self {
            fixtures_path,
            leaderboard_dir,
            leaderboard_name,
            leaderboard_size,
            score_prefix,
            export_path,
        }
    }
}

fn default_store_dir(lookup: &impl Fn(&str) -> Option<String>) -> PathBuf {
    // Prefer XDG cache.
    if let Some(base) = lookup("XDG_CACHE_HOME").filter(|v| !v.trim().is_empty()) {
        return PathBuf::from(base).join(APP_DIR);
    }
    match lookup("HOME").filter(|v| !v.trim().is_empty()) {
        Some(home) => PathBuf::from(home).join(".cache").join(APP_DIR),
        None => PathBuf::from("."),
    }
}
