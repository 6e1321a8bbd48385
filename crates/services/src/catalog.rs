//! Quiz assembly: the built-in question set and TOML catalog files.
//!
//! A catalog is a list of `[[questions]]` tables, each tagged by `kind`:
//!
//! ```toml
//! [[questions]]
//! kind = "multiple_choice"
//! prompt = "What is the capital of France?"
//! options = ["London", "Paris", "Berlin", "Rome"]
//! correct_option = 2
//! ```

use std::path::Path;

use quiz_core::model::{Question, QuestionDraft};
use serde::Deserialize;
use tracing::debug;

use crate::error::CatalogError;

const BUILTIN_CATALOG: &str = include_str!("../catalog/builtin.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    questions: Vec<QuestionDraft>,
}

/// The default ten-question set.
///
/// # Errors
///
/// Only fails if the bundled catalog is malformed.
pub fn builtin() -> Result<Vec<Question>, CatalogError> {
    parse(BUILTIN_CATALOG)
}

/// Read and validate a catalog file.
///
/// # Errors
///
/// Returns `CatalogError::Read` if the file cannot be read, and the errors of
/// [`parse`] otherwise.
pub fn load(path: &Path) -> Result<Vec<Question>, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let questions = parse(&text)?;
    debug!(path = %path.display(), count = questions.len(), "catalog loaded");
    Ok(questions)
}

/// Parse catalog text, keeping file order.
///
/// # Errors
///
/// Returns `CatalogError::Parse` for malformed TOML, `CatalogError::Question`
/// with the 1-based position of the first invalid question, and
/// `CatalogError::Empty` if no questions are present.
pub fn parse(text: &str) -> Result<Vec<Question>, CatalogError> {
    let file: CatalogFile = toml::from_str(text)?;
    if file.questions.is_empty() {
        return Err(CatalogError::Empty);
    }
    file.questions
        .into_iter()
        .enumerate()
        .map(|(index, draft)| {
            draft.validate().map_err(|source| CatalogError::Question {
                position: index + 1,
                source,
            })
        })
        .collect()
}
