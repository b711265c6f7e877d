use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Expected 7 judgement counts, got {0}")]
    InvalidJudgementCount(usize),

    #[error("Invalid judgement count {value} in {bucket} bucket")]
    InvalidJudgementValue { bucket: &'static str, value: i64 },

    #[error("Invalid speed modifier: {0}")]
    InvalidSpeed(f64),

    #[error("Invalid PGU difficulty: {0}")]
    InvalidDifficulty(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Player is banned: {0}")]
    PlayerBanned(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
