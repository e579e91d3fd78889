//! Candidate attributes: evaluable features discriminating between two languages.
//!
//! `Attribute` is a closed tagged union so future attribute kinds can be added
//! without touching the pool or the generation step. Instances are immutable;
//! mutation returns a new attribute.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use super::EvolveError;
use crate::schema::InputRow;

/// A candidate feature under evolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Attribute {
    /// Word-presence attribute.
    Word(WordAttribute),
}

impl Attribute {
    /// Create a word-presence attribute targeting `word`.
    pub fn word(word: impl Into<String>) -> Self {
        Attribute::Word(WordAttribute::new(word))
    }

    /// Stable textual identity: variant tag plus parameter. Used as the
    /// dedup/tie-break key in the pool.
    pub fn name(&self) -> String {
        match self {
            Attribute::Word(attr) => attr.name(),
        }
    }

    /// Discriminative score of this attribute against the input set.
    ///
    /// Pure: depends only on the arguments, so repeated calls with the same
    /// inputs return the identical value.
    pub fn fitness(&self, inputs: &[InputRow], language_one: &str, language_two: &str) -> f64 {
        match self {
            Attribute::Word(attr) => attr.fitness(inputs, language_one, language_two),
        }
    }

    /// Produce a new attribute derived from this one by sampling `vocabulary`.
    pub fn mutate(&self, vocabulary: &[String], rng: &mut StdRng) -> Result<Self, EvolveError> {
        match self {
            Attribute::Word(attr) => Ok(Attribute::Word(attr.mutate(vocabulary, rng)?)),
        }
    }
}

/// Attribute parameterized by a single target word.
///
/// Polarity: a row containing the target word is predicted as `language_one`,
/// a row without it as `language_two`. Fitness is the fraction of rows whose
/// prediction matches the actual label; rows carrying a third label are
/// skipped deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAttribute {
    word: String,
}

impl WordAttribute {
    /// Create an attribute targeting `word`.
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }

    /// The target word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Unique identity of this attribute.
    pub fn name(&self) -> String {
        format!("word:{}", self.word)
    }

    /// Fraction of rows correctly classified by presence of the target word.
    pub fn fitness(&self, inputs: &[InputRow], language_one: &str, language_two: &str) -> f64 {
        let mut considered = 0usize;
        let mut correct = 0usize;

        for row in inputs {
            if row.label != language_one && row.label != language_two {
                continue;
            }
            considered += 1;

            let predicted = if row.contains(&self.word) {
                language_one
            } else {
                language_two
            };
            if predicted == row.label {
                correct += 1;
            }
        }

        if considered == 0 {
            0.0
        } else {
            correct as f64 / considered as f64
        }
    }

    /// Replace the target word with a uniform draw from the vocabulary
    /// multiset. Words appearing more often across the corpus are
    /// proportionally more likely to be drawn.
    pub fn mutate(&self, vocabulary: &[String], rng: &mut StdRng) -> Result<Self, EvolveError> {
        let word = vocabulary.choose(rng).ok_or(EvolveError::EmptyVocabulary)?;
        Ok(Self::new(word.clone()))
    }
}
