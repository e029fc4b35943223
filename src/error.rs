use thiserror::Error;

pub type Result<T> = std::result::Result<T, PredictorError>;

#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("no data: {0}")]
    DataMissing(String),

    #[error("selection cancelled")]
    SelectionCancelled,

    #[error("malformed score {0:?}, expected \"A:B\"")]
    MalformedScore(String),

    #[error("missing column {0}")]
    MissingHeader(&'static str),

    #[error("column {index} should be {expected}, found {found:?}")]
    UnexpectedHeader {
        index: usize,
        expected: &'static str,
        found: String,
    },

    #[error("row {row}: bad date {value:?}, expected DD/MM/YYYY")]
    BadDate { row: usize, value: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PredictorError {
    pub fn data_missing(msg: impl Into<String>) -> Self {
        Self::DataMissing(msg.into())
    }
}
