//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::{QuestionError, QuizSummaryError};

/// Errors emitted while presenting a quiz or logging in.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("input closed during login")]
    LoginInterrupted,
    #[error("input closed after {answered} of {total} questions")]
    InputClosed { answered: usize, total: usize },
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Summary(#[from] QuizSummaryError),
}

/// Errors emitted while assembling a question catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read quiz catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid quiz catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("question {position} is invalid: {source}")]
    Question {
        position: usize,
        #[source]
        source: QuestionError,
    },
    #[error("quiz catalog has no questions")]
    Empty,
}
