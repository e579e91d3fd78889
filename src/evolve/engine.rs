//! Evolution engine: seeding, the generation step, and the run loop.

use log::debug;
use rand::prelude::*;
use serde::Serialize;

use super::EvolveError;
use super::attribute::Attribute;
use super::pool::{Pool, RankedAttribute};
use crate::schema::{EvolutionConfig, InputRow};

/// Per-generation progress snapshot, reported through run callbacks.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    /// Generations completed so far.
    pub generation: usize,
    /// Current pool size.
    pub size: usize,
    /// Best fitness in the pool.
    pub best_fitness: f64,
    /// Mean fitness across the pool.
    pub mean_fitness: f64,
}

/// Best and mean fitness per completed generation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EvolutionHistory {
    pub best_fitness: Vec<f64>,
    pub mean_fitness: Vec<f64>,
}

/// Drives the evolution of an attribute pool over a fixed input set.
///
/// Owns the pool, the fixed inputs, the two language labels, and the run's
/// random source. Generations execute strictly sequentially; each step's
/// staging and pruning depends on the fully settled pool of the previous one.
#[derive(Debug)]
pub struct EvolutionEngine {
    config: EvolutionConfig,
    inputs: Vec<InputRow>,
    language_one: String,
    language_two: String,
    /// Flattened multiset of every word across the inputs. Duplicates are
    /// kept: frequent words are proportionally more likely mutation targets.
    vocabulary: Vec<String>,
    pool: Pool,
    rng: StdRng,
    generation: usize,
    history: EvolutionHistory,
}

impl EvolutionEngine {
    /// Create an engine and seed its pool.
    ///
    /// Seeding mutates a baseline word attribute `config.seed_count` times and
    /// inserts each result; duplicates collapse, so the realized pool may be
    /// smaller. Fails fast with [`EvolveError::EmptyVocabulary`] when the
    /// inputs carry no words at all.
    pub fn new(
        inputs: Vec<InputRow>,
        language_one: impl Into<String>,
        language_two: impl Into<String>,
        config: EvolutionConfig,
    ) -> Result<Self, EvolveError> {
        config.validate()?;

        let language_one = language_one.into();
        let language_two = language_two.into();

        let vocabulary: Vec<String> = inputs
            .iter()
            .flat_map(|row| row.words.iter().cloned())
            .collect();
        if vocabulary.is_empty() {
            return Err(EvolveError::EmptyVocabulary);
        }

        let mut rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut pool = Pool::new();
        let baseline = Attribute::word("a");
        for _ in 0..config.seed_count {
            let candidate = baseline.mutate(&vocabulary, &mut rng)?;
            let fitness = candidate.fitness(&inputs, &language_one, &language_two);
            pool.insert(RankedAttribute::new(fitness, candidate));
        }

        debug!(
            "seeded pool with {} attributes from {} mutations ({} words in vocabulary)",
            pool.len(),
            config.seed_count,
            vocabulary.len()
        );

        Ok(Self {
            config,
            inputs,
            language_one,
            language_two,
            vocabulary,
            pool,
            rng,
            generation: 0,
            history: EvolutionHistory::default(),
        })
    }

    /// Run one generation step.
    ///
    /// Every member spawns a mutated offspring with probability equal to its
    /// fitness (clamped to [0, 1] as a Bernoulli chance), staged offspring are
    /// merged in subject to the pool's dedup rule, and the pool is pruned from
    /// the bottom back down to capacity.
    pub fn next_generation(&mut self) -> Result<(), EvolveError> {
        let mut staged = Vec::new();
        for member in self.pool.iter() {
            let chance = member.fitness.clamp(0.0, 1.0);
            if self.rng.r#gen::<f64>() < chance {
                let child = member.attribute.mutate(&self.vocabulary, &mut self.rng)?;
                let fitness = child.fitness(&self.inputs, &self.language_one, &self.language_two);
                staged.push(RankedAttribute::new(fitness, child));
            }
        }

        for candidate in staged {
            self.pool.insert(candidate);
        }

        // Natural selection: always discard the current minimum
        while self.pool.len() > self.config.max_pool_size {
            self.pool.remove_lowest();
        }

        self.generation += 1;

        let summary = self.summary();
        self.history.best_fitness.push(summary.best_fitness);
        self.history.mean_fitness.push(summary.mean_fitness);
        debug!(
            "generation {}: size={} best={:.4} mean={:.4}",
            summary.generation, summary.size, summary.best_fitness, summary.mean_fitness
        );

        Ok(())
    }

    /// Run `config.generations` steps in strict sequence.
    pub fn run(&mut self) -> Result<(), EvolveError> {
        self.run_with_callback(|_| {})
    }

    /// Run all generations, reporting a summary after each step.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> Result<(), EvolveError>
    where
        F: FnMut(&GenerationSummary),
    {
        for _ in 0..self.config.generations {
            self.next_generation()?;
            callback(&self.summary());
        }
        Ok(())
    }

    /// Snapshot of the current pool state.
    pub fn summary(&self) -> GenerationSummary {
        let best_fitness = self.pool.best().map(|r| r.fitness).unwrap_or(0.0);
        let mean_fitness = if self.pool.is_empty() {
            0.0
        } else {
            self.pool.iter().map(|r| r.fitness).sum::<f64>() / self.pool.len() as f64
        };

        GenerationSummary {
            generation: self.generation,
            size: self.pool.len(),
            best_fitness,
            mean_fitness,
        }
    }

    /// The current pool, ascending by fitness.
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best/mean fitness per completed generation.
    pub fn history(&self) -> &EvolutionHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(words: &[&str], label: &str) -> InputRow {
        InputRow::new(words.iter().map(|w| w.to_string()).collect(), label)
    }

    fn training_rows() -> Vec<InputRow> {
        vec![
            row(&["de", "huis", "is", "groot"], "Dutch"),
            row(&["the", "house", "is", "big"], "English"),
            row(&["de", "kat", "slaapt"], "Dutch"),
            row(&["the", "cat", "sleeps"], "English"),
        ]
    }

    fn seeded_config(random_seed: u64) -> EvolutionConfig {
        EvolutionConfig {
            random_seed: Some(random_seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_capacity_invariant_over_full_run() {
        let mut engine =
            EvolutionEngine::new(training_rows(), "Dutch", "English", seeded_config(42)).unwrap();

        engine
            .run_with_callback(|summary| {
                assert!(summary.size <= 12);
            })
            .unwrap();

        assert_eq!(engine.generation(), 50);
        assert!(engine.pool().len() <= 12);
    }

    #[test]
    fn test_deterministic_given_fixed_seed() {
        let run = || {
            let mut engine =
                EvolutionEngine::new(training_rows(), "Dutch", "English", seeded_config(7))
                    .unwrap();
            engine.run().unwrap();
            engine
                .pool()
                .iter()
                .map(|r| (r.attribute.name(), r.fitness))
                .collect::<Vec<_>>()
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn test_pool_stays_ordered() {
        let mut engine =
            EvolutionEngine::new(training_rows(), "Dutch", "English", seeded_config(3)).unwrap();
        engine.run().unwrap();

        let members: Vec<_> = engine.pool().iter().collect();
        for pair in members.windows(2) {
            assert!(pair[0].fitness <= pair[1].fitness);
            if pair[0].fitness == pair[1].fitness {
                assert!(pair[0].attribute.name() < pair[1].attribute.name());
            }
        }
    }

    #[test]
    fn test_seeding_collapses_duplicates() {
        // Vocabulary has 4 distinct words; 20 seed mutations cannot produce
        // more than 4 distinct names
        let inputs = vec![
            row(&["de", "huis"], "Dutch"),
            row(&["the", "house"], "English"),
        ];
        let engine = EvolutionEngine::new(inputs, "Dutch", "English", seeded_config(11)).unwrap();
        assert!(engine.pool().len() <= 4);
        assert!(!engine.pool().is_empty());
    }

    #[test]
    fn test_empty_vocabulary_fails_construction() {
        let inputs = vec![row(&[], "Dutch"), row(&[], "English")];
        let result = EvolutionEngine::new(inputs, "Dutch", "English", seeded_config(1));
        assert!(matches!(result, Err(EvolveError::EmptyVocabulary)));
    }

    #[test]
    fn test_invalid_config_fails_construction() {
        let config = EvolutionConfig {
            max_pool_size: 0,
            ..Default::default()
        };
        let result = EvolutionEngine::new(training_rows(), "Dutch", "English", config);
        assert!(matches!(result, Err(EvolveError::Config(_))));
    }

    #[test]
    fn test_history_tracks_every_generation() {
        let config = EvolutionConfig {
            generations: 10,
            ..seeded_config(5)
        };
        let mut engine = EvolutionEngine::new(training_rows(), "Dutch", "English", config).unwrap();
        engine.run().unwrap();

        assert_eq!(engine.history().best_fitness.len(), 10);
        assert_eq!(engine.history().mean_fitness.len(), 10);
        // Truncation keeps the maximum, so the best can never regress
        let best = &engine.history().best_fitness;
        for pair in best.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn test_strong_separator_survives() {
        // "de" and "the" perfectly separate the corpus; after 50 generations
        // the best member must classify every row correctly
        let mut engine =
            EvolutionEngine::new(training_rows(), "Dutch", "English", seeded_config(9)).unwrap();
        engine.run().unwrap();
        assert_eq!(engine.pool().best().unwrap().fitness, 1.0);
    }
}
