use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::PredictorError;

pub const EXACT: u32 = 3;
pub const CORRECT: u32 = 1;
pub const WRONG: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Draw,
    Lose,
    Invalid,
}

impl Outcome {
    pub fn reversed(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Score {
    #[default]
    Unset,
    Goals {
        a: u32,
        b: u32,
    },
}

impl Score {
    pub fn new(a: u32, b: u32) -> Self {
        Score::Goals { a, b }
    }

    /// Lenient constructor used for table cells: blank means unplayed and
    /// anything unparseable degrades to `Unset` instead of failing the load.
    pub fn from_cell(cell: Option<&str>) -> Self {
        let Some(raw) = cell.map(str::trim).filter(|s| !s.is_empty()) else {
            return Score::Unset;
        };
        match raw.parse::<Score>() {
            Ok(score) => score,
            Err(err) => {
                warn!(cell = raw, "{err}; treating as unset");
                Score::Unset
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Score::Goals { .. })
    }

    pub fn goals(&self) -> Option<(u32, u32)> {
        match *self {
            Score::Goals { a, b } => Some((a, b)),
            Score::Unset => None,
        }
    }

    pub fn result(&self) -> Outcome {
        match *self {
            Score::Unset => Outcome::Invalid,
            Score::Goals { a, b } if a > b => Outcome::Win,
            Score::Goals { a, b } if a == b => Outcome::Draw,
            Score::Goals { .. } => Outcome::Lose,
        }
    }

    /// Points earned by `other` as a prediction of `self`.
    /// Either side unset scores nothing.
    pub fn compare(&self, other: &Score) -> u32 {
        match (self, other) {
            (Score::Unset, _) | (_, Score::Unset) => WRONG,
            (actual, predicted) if actual == predicted => EXACT,
            (actual, predicted) if actual.result() == predicted.result() => CORRECT,
            _ => WRONG,
        }
    }
}

impl FromStr for Score {
    type Err = PredictorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || PredictorError::MalformedScore(raw.to_string());
        let (a, b) = raw.trim().split_once(':').ok_or_else(malformed)?;
        // "-:-" is the placeholder the dump prints for unplayed games.
        if a.trim() == "-" && b.trim() == "-" {
            return Ok(Score::Unset);
        }
        let a = a.trim().parse::<u32>().map_err(|_| malformed())?;
        let b = b.trim().parse::<u32>().map_err(|_| malformed())?;
        Ok(Score::Goals { a, b })
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Goals { a, b } => write!(f, "{a}:{b}"),
            Score::Unset => write!(f, "-:-"),
        }
    }
}
