use thiserror::Error;

use crate::Level;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No word is being presented")]
    NoCurrentWord,
    #[error("Selection has {actual} tiles but the word has {expected} letters")]
    SelectionLengthMismatch { expected: usize, actual: usize },
    #[error("Level {0} is outside the playable range")]
    InvalidLevel(Level),
    #[error("Lives {lives} are outside 1..={max}")]
    LivesOutOfRange { lives: u8, max: u8 },
    #[error("Snapshot is {age_secs}s old, older than the {max_age_secs}s limit")]
    StaleSnapshot { age_secs: u64, max_age_secs: u64 },
    #[error("Rule {0} must be at least 1")]
    InvalidRule(&'static str),
}

pub type Result<T> = core::result::Result<T, GameError>;
