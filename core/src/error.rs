//! Error types for the quiz core.

use thiserror::Error;

/// Misuse of a `QuizBrain`: calls made in a state where they have no meaning.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions left in this quiz")]
    Exhausted,
    #[error("no question has been served yet")]
    NoCurrentQuestion,
    #[error("question {question_number} was already answered")]
    AlreadyAnswered { question_number: usize },
}

/// Failures while fetching or decoding a batch of questions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("trivia request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("trivia service returned code {code}: {reason}")]
    Api { code: u8, reason: &'static str },
    #[error("trivia service returned no questions")]
    Empty,
    #[error("question {index} has an invalid answer {value:?}")]
    InvalidAnswer { index: usize, value: String },
    #[error("question fetch was interrupted")]
    Interrupted,
    #[error("malformed trivia payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
