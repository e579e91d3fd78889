//! Fitness-ordered, capacity-bounded attribute pool.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::attribute::Attribute;

/// An attribute together with its fitness score against the fixed input set.
///
/// Fitness is a pure function of the attribute and the run's fixed inputs, so
/// the score computed at insertion time orders the pool identically to
/// recomputing it on every comparison.
#[derive(Debug, Clone)]
pub struct RankedAttribute {
    /// Fitness against the run's input set.
    pub fitness: f64,
    /// The attribute itself.
    pub attribute: Attribute,
}

impl RankedAttribute {
    /// Rank an attribute with its computed fitness.
    pub fn new(fitness: f64, attribute: Attribute) -> Self {
        Self { fitness, attribute }
    }
}

impl PartialEq for RankedAttribute {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedAttribute {}

impl PartialOrd for RankedAttribute {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedAttribute {
    /// Ascending by fitness; name is a deterministic tie-break only. Equal
    /// (fitness, name) means equal element, which is the pool's dedup rule.
    fn cmp(&self, other: &Self) -> Ordering {
        self.fitness
            .total_cmp(&other.fitness)
            .then_with(|| self.attribute.name().cmp(&other.attribute.name()))
    }
}

/// The living set of candidate attributes.
///
/// A sorted associative set keyed by (fitness, name): insertion and removal
/// are logarithmic, iteration is ascending by fitness, and members tying on
/// both fitness and name collapse to one.
#[derive(Debug, Clone, Default)]
pub struct Pool {
    members: BTreeSet<RankedAttribute>,
}

impl Pool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a ranked attribute. Returns false if an element with the same
    /// (fitness, name) key already exists; repeated identical mutations must
    /// not inflate the pool.
    pub fn insert(&mut self, ranked: RankedAttribute) -> bool {
        self.members.insert(ranked)
    }

    /// Remove and return the minimum-fitness member. `None` on an empty pool.
    pub fn remove_lowest(&mut self) -> Option<RankedAttribute> {
        self.members.pop_first()
    }

    /// The maximum-fitness member.
    pub fn best(&self) -> Option<&RankedAttribute> {
        self.members.last()
    }

    /// Iterate members in ascending fitness order.
    pub fn iter(&self) -> impl Iterator<Item = &RankedAttribute> {
        self.members.iter()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the pool has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
