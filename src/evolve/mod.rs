//! Genetic evolution of classification attributes.
//!
//! The evolutionary loop consists of:
//!
//! - **Attributes** (`attribute`): evaluable features with fitness, mutation,
//!   and a stable name
//! - **Pool** (`pool`): fitness-ordered, capacity-bounded, deduplicating set
//! - **Engine** (`engine`): seeding, the generation step, and the run loop
//!
//! Each generation, every member spawns a mutated offspring with probability
//! proportional to its fitness, offspring are merged into the pool, and the
//! pool is truncated back to capacity by discarding its least fit members.
//! Crossover between two parent attributes is not implemented; mutation and
//! truncation form the complete generation operator.
//!
//! # Example
//!
//! ```rust
//! use lexevo::evolve::EvolutionEngine;
//! use lexevo::schema::{EvolutionConfig, InputRow};
//!
//! let inputs = vec![
//!     InputRow::new(vec!["de".into(), "huis".into()], "Dutch"),
//!     InputRow::new(vec!["the".into(), "house".into()], "English"),
//! ];
//!
//! let config = EvolutionConfig {
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut engine = EvolutionEngine::new(inputs, "Dutch", "English", config).unwrap();
//! engine.run().unwrap();
//!
//! for member in engine.pool().iter() {
//!     println!("{}: {:.3}", member.attribute.name(), member.fitness);
//! }
//! ```

mod attribute;
mod engine;
mod pool;

pub use attribute::{Attribute, WordAttribute};
pub use engine::{EvolutionEngine, EvolutionHistory, GenerationSummary};
pub use pool::{Pool, RankedAttribute};

/// Errors raised while constructing or running an evolution.
#[derive(Debug, thiserror::Error)]
pub enum EvolveError {
    /// Mutation was attempted against zero available words. Fatal: the run
    /// cannot proceed without a sampling source.
    #[error("Cannot mutate attributes: the input set contains no words")]
    EmptyVocabulary,
    /// The run configuration failed validation.
    #[error("Invalid evolution configuration: {0}")]
    Config(#[from] crate::schema::ConfigError),
}
