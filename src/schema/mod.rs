//! Configuration and input types for genetic attribute selection.

mod config;
mod input;

pub use config::{ConfigError, EvolutionConfig};
pub use input::{CorpusError, InputRow, filter_languages, load_examples};
