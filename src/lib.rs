//! Genetic selection of word attributes that discriminate between two languages.
//!
//! Given tokenized text samples labeled with one of two languages, this crate
//! evolves a small pool of candidate attributes (word-presence features) with
//! a genetic algorithm: mutation proportional to fitness, growth, and
//! truncation to a fixed carrying capacity across a fixed number of
//! generations.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Run configuration and training input types
//! - `evolve`: Attributes, the fitness-ordered pool, and the evolution engine
//!
//! # Example
//!
//! ```rust,no_run
//! use lexevo::{
//!     evolve::EvolutionEngine,
//!     schema::{EvolutionConfig, filter_languages, load_examples},
//! };
//! use std::path::Path;
//!
//! let rows = load_examples(Path::new("training.txt")).unwrap();
//! let rows = filter_languages(rows, "English", "Dutch");
//!
//! let mut engine =
//!     EvolutionEngine::new(rows, "English", "Dutch", EvolutionConfig::default()).unwrap();
//! engine.run().unwrap();
//!
//! println!("Best fitness: {:.3}", engine.pool().best().unwrap().fitness);
//! ```

pub mod evolve;
pub mod schema;

// Re-export commonly used types
pub use evolve::{Attribute, EvolutionEngine, EvolveError, Pool, RankedAttribute, WordAttribute};
pub use schema::{EvolutionConfig, InputRow};
