use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;

pub const DEFAULT_MAX_SIZE: usize = 10;
const FILE_SUFFIX: &str = "hst";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u64,
}

pub trait LeaderboardStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn save(&self, key: &str, blob: &[u8]) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{FILE_SUFFIX}"))
    }
}

impl LeaderboardStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, blob: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("hst.tmp");
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    name: String,
    max_size: usize,
    #[serde(default)]
    prefix: String,
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new(name: impl Into<String>, max_size: usize) -> Self {
        Self {
            name: name.into(),
            max_size,
            prefix: String::new(),
            entries: Vec::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn insert(&mut self, name: impl Into<String>, score: u64) -> bool {
        let added = self.is_high_score(score);
        if added {
            self.entries.push(LeaderboardEntry {
                name: name.into(),
                score,
            });
            self.sort_entries();
        }
        while self.entries.len() > self.max_size {
            self.entries.pop();
        }
        added
    }

    fn sort_entries(&mut self) {
        self.entries
            .sort_by(|a, b| b.score.cmp(&a.score).then_with(|| b.name.cmp(&a.name)));
    }

    pub fn is_high_score(&self, score: u64) -> bool {
        if self.entries.len() < self.max_size {
            return true;
        }
        let Some(lowest) = self.entries.last() else {
            return false;
        };
        if score > lowest.score {
            true
        } else {
            // Only reachable below capacity, which returned above: a tie at the
            // cutoff never displaces the current holder.
            score == lowest.score && self.entries.len() < self.max_size
        }
    }

    pub fn persist(&self, store: &dyn LeaderboardStore) -> Result<()> {
        let blob = serde_json::to_vec(self)?;
        store.save(&self.name, &blob)?;
        info!(leaderboard = %self.name, entries = self.entries.len(), "leaderboard saved");
        Ok(())
    }

    /// Replaces entries and size with the stored copy. A missing or unreadable
    /// blob keeps the in-memory state and only logs a warning.
    pub fn restore(&mut self, store: &dyn LeaderboardStore) -> bool {
        let blob = match store.load(&self.name) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                warn!(leaderboard = %self.name, "no saved leaderboard found");
                return false;
            }
            Err(err) => {
                warn!(leaderboard = %self.name, "leaderboard unavailable: {err}");
                return false;
            }
        };
        match serde_json::from_slice::<Leaderboard>(&blob) {
            Ok(saved) => {
                self.entries = saved.entries;
                self.max_size = saved.max_size.max(1);
                self.sort_entries();
                self.entries.truncate(self.max_size);
                info!(leaderboard = %self.name, entries = self.entries.len(), "leaderboard loaded");
                true
            }
            Err(err) => {
                warn!(leaderboard = %self.name, "saved leaderboard is unreadable: {err}");
                false
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "{} High Score Table - top {} scores\n",
            self.name, self.max_size
        );
        if self.entries.is_empty() {
            out.push_str("No high scores recorded.\n");
            return out;
        }
        for (idx, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} - {}{}\n",
                idx + 1,
                entry.name,
                self.prefix,
                group_thousands(entry.score)
            ));
        }
        out
    }
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
