use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use wc_predictor::config::Config;
use wc_predictor::leaderboard::FileStore;
use wc_predictor::shell::Shell;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    // Logs go to stderr so they never interleave with shell output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    let store = FileStore::new(config.leaderboard_dir.clone());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(config, store, stdin.lock(), stdout.lock());
    shell.run()
}
