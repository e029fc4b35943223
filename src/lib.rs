pub mod charts;
pub mod config;
pub mod error;
pub mod export;
pub mod fixture;
pub mod leaderboard;
pub mod league;
pub mod predictions;
pub mod report;
pub mod score;
pub mod shell;
pub mod team;

pub use error::{PredictorError, Result};
