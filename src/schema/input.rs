//! Training examples: one labeled, tokenized text sample per row.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One training example. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRow {
    /// Ordered word tokens of the sample.
    pub words: Vec<String>,
    /// Class label (the language the sample is written in).
    pub label: String,
}

impl InputRow {
    /// Create a row from tokens and a label.
    pub fn new(words: Vec<String>, label: impl Into<String>) -> Self {
        Self {
            words,
            label: label.into(),
        }
    }

    /// Whether the row's token sequence contains `word`.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Errors raised while loading a training corpus.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Failed to read training file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Training file {0} contains no examples")]
    NoRows(String),
}

/// Load training examples from a text file.
///
/// Each non-empty line is one example: the first whitespace-separated token is
/// the label, the remainder are the sample's words (lowercased).
pub fn load_examples(path: &Path) -> Result<Vec<InputRow>, CorpusError> {
    let text = fs::read_to_string(path)?;

    let mut rows = Vec::new();
    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        let Some(label) = tokens.next() else {
            continue;
        };
        let words = tokens.map(|w| w.to_lowercase()).collect();
        rows.push(InputRow::new(words, label));
    }

    if rows.is_empty() {
        return Err(CorpusError::NoRows(path.display().to_string()));
    }
    Ok(rows)
}

/// Retain only rows labeled with one of the two languages under comparison.
pub fn filter_languages(
    rows: Vec<InputRow>,
    language_one: &str,
    language_two: &str,
) -> Vec<InputRow> {
    rows.into_iter()
        .filter(|row| row.label == language_one || row.label == language_two)
        .collect()
}
