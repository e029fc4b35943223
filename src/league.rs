use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{PredictorError, Result};
use crate::fixture::{DATE_FORMAT, Fixture};
use crate::leaderboard::Leaderboard;
use crate::predictions::PredictionBook;
use crate::score::Score;
use crate::team::{Team, Teams};

pub const FIXED_COLUMNS: [&str; 5] = ["Group", "TeamA", "TeamB", "When", "Score"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreHistory {
    pub player: String,
    pub points: Vec<(NaiveDate, u32)>,
}

#[derive(Debug, Clone, Default)]
pub struct League {
    teams: Teams,
    fixtures: Vec<Fixture>,
    groups: BTreeMap<String, BTreeSet<String>>,
    book: PredictionBook,
}

impl League {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_csv(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "loading fixtures");
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for (index, expected) in FIXED_COLUMNS.into_iter().enumerate() {
            let Some(found) = headers.get(index) else {
                return Err(PredictorError::MissingHeader(expected));
            };
            if !found.eq_ignore_ascii_case(expected) {
                return Err(PredictorError::UnexpectedHeader {
                    index,
                    expected,
                    found: found.to_string(),
                });
            }
        }
        // (column, player) pairs. A repeated header keeps its first column so
        // every player has exactly one prediction per fixture.
        let mut players: Vec<(usize, &str)> = Vec::new();
        for (col, name) in headers.iter().enumerate().skip(FIXED_COLUMNS.len()) {
            if players.iter().any(|(_, seen)| *seen == name) {
                warn!(player = name, column = col + 1, "duplicate player column ignored");
                continue;
            }
            players.push((col, name));
        }

        let mut league = League::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            // Header is line 1.
            let row = idx + 2;
            debug!(row, ?record, "fixture row");

            let raw_when = record.get(3).unwrap_or_default();
            let when = NaiveDate::parse_from_str(raw_when, DATE_FORMAT).map_err(|_| {
                PredictorError::BadDate {
                    row,
                    value: raw_when.to_string(),
                }
            })?;
            let predictions = players
                .iter()
                .map(|(col, player)| (*player, Score::from_cell(record.get(*col))));
            league.add_fixture(
                record.get(0).unwrap_or_default(),
                record.get(1).unwrap_or_default(),
                record.get(2).unwrap_or_default(),
                when,
                Score::from_cell(record.get(4)),
                predictions,
            );
        }

        info!(
            fixtures = league.fixtures.len(),
            teams = league.teams.len(),
            players = league.book.players().len(),
            "fixtures loaded"
        );
        Ok(league)
    }

    pub fn add_fixture<'p>(
        &mut self,
        group: &str,
        team_a: &str,
        team_b: &str,
        when: NaiveDate,
        score: Score,
        predictions: impl IntoIterator<Item = (&'p str, Score)>,
    ) {
        let a = self.teams.resolve(team_a);
        let b = self.teams.resolve(team_b);
        let fixture = Fixture::new(a, b, when, group, score);
        fixture.calc_stats(&mut self.teams);

        let members = self.groups.entry(group.to_string()).or_default();
        members.insert(team_a.to_string());
        members.insert(team_b.to_string());

        let source = self.fixtures.len();
        for (player, predicted) in predictions {
            self.book.record(player, source, &fixture, predicted);
        }
        self.fixtures.push(fixture);
    }

    pub fn teams(&self) -> &Teams {
        &self.teams
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn groups(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.groups
    }

    pub fn predictions(&self) -> &PredictionBook {
        &self.book
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    pub fn results(&self) -> Vec<&Fixture> {
        let mut out: Vec<&Fixture> = self.fixtures.iter().filter(|f| f.is_played()).collect();
        out.sort_by(|a, b| a.display_order(b, &self.teams));
        out
    }

    pub fn group_standings(&self, group: &str) -> Vec<&Team> {
        let Some(members) = self.groups.get(group) else {
            return Vec::new();
        };
        self.teams.standings(members.iter().map(String::as_str))
    }

    pub fn leaderboard(&self, name: &str, max_size: usize) -> Leaderboard {
        let mut board = Leaderboard::new(name, max_size);
        self.fill_leaderboard(&mut board);
        board
    }

    pub fn fill_leaderboard(&self, board: &mut Leaderboard) {
        for player in self.book.players() {
            board.insert(player.name.clone(), u64::from(player.total));
        }
    }

    pub fn score_history(&self) -> Vec<ScoreHistory> {
        let mut out: Vec<ScoreHistory> = self
            .book
            .players()
            .iter()
            .map(|player| {
                let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
                for (fixture, guess) in player.scored(&self.fixtures) {
                    if !fixture.is_played() {
                        continue;
                    }
                    *per_day.entry(fixture.when).or_default() += guess.points.unwrap_or_default();
                }
                let mut running = 0u32;
                let points = per_day
                    .into_iter()
                    .map(|(day, pts)| {
                        running += pts;
                        (day, running)
                    })
                    .collect();
                ScoreHistory {
                    player: player.name.clone(),
                    points,
                }
            })
            .collect();
        out.sort_by(|a, b| a.player.cmp(&b.player));
        out
    }
}
