//! Error types for the algorithm crate.

use thiserror::Error;

/// Failures while building a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The requested level is not in the word bank.
    #[error("level not found: {0}")]
    LevelNotFound(String),

    /// The level has too few distinct words to fill the question set.
    #[error("level {level} has {available} distinct words, {required} required")]
    InsufficientWords {
        level: String,
        available: usize,
        required: usize,
    },
}

/// A difficulty policy whose thresholds or bounds contradict each other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("fast threshold {fast_max}s is above slow threshold {slow_min}s")]
    InvertedThresholds { fast_max: i64, slow_min: i64 },

    #[error("grade ceiling {ceiling} is below floor {floor}")]
    CeilingBelowFloor { floor: i64, ceiling: i64 },
}

/// A word bank that could not be parsed.
#[derive(Debug, Error)]
pub enum WordBankError {
    #[error("invalid word bank json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("word bank has no levels")]
    Empty,
}
