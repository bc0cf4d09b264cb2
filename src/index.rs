//! The combinatorial aggregator.
//!
//! For one query (base stats + scaling coefficient) the aggregator runs the
//! derived-stat calculator over the full modifier × distribution cross
//! product (178,750 evaluations at the default spaces) and groups every
//! explanation by the observable tuple it produces.
//!
//! The resulting [`ObservationIndex`] maps each derived stat to the
//! modifiers that can explain it, and each modifier to every distribution
//! producing that outcome. Duplicate distributions are retained on purpose:
//! the probability model needs occurrence counts, not set membership.
//!
//! Index construction is a commutative, associative accumulation, so with
//! the `parallel` feature the modifier axis is sharded across threads and
//! the shard-local indexes merged; the result is observably identical to
//! the sequential build.

use crate::error::EngineError;
use crate::formula::derive_stats;
use crate::space::{
    default_distribution_space, default_modifier_space, DistributionSpace, ModifierSpace,
};
use crate::stat_vector::{BaseStats, DerivedStat, Distribution, Modifier};
use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Upper bound on modifier × distribution evaluations per query.
///
/// Extreme parameterizations fail with
/// [`EngineError::EnumerationLimit`] instead of silently grinding.
pub const MAX_EVALUATIONS: u64 = 100_000_000;

/// One inference query: the visible inputs a caller knows about a pet.
///
/// # Examples
///
/// ```rust
/// use petbase::{Query, StatVector};
///
/// let query = Query::new(StatVector::new(3, 5, 4, 6), 110);
/// assert_eq!(query.scaling_coefficient, 110);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Query {
    /// Visible base stats in slot order.
    pub base: BaseStats,
    /// Growth-scaling coefficient, as an integer percentage.
    pub scaling_coefficient: i64,
}

impl Query {
    /// Create a query from base stats and a scaling coefficient.
    pub fn new(base: BaseStats, scaling_coefficient: i64) -> Self {
        Self {
            base,
            scaling_coefficient,
        }
    }
}

/// Every combinatorial explanation compatible with each observable outcome
/// of one query.
///
/// Two-level ownership: an outer map from derived stat to an inner map from
/// modifier to the (duplicate-retaining) list of distributions. Entries are
/// created explicitly on first insert; per-key contents are a pure function
/// of the query, independent of iteration order.
#[derive(Debug, Clone)]
pub struct ObservationIndex {
    entries: HashMap<DerivedStat, HashMap<Modifier, Vec<Distribution>>>,
    point_total: i64,
    modifier_count: usize,
    max_modifier: Modifier,
}

impl ObservationIndex {
    /// Build the index for a query over the process-wide default spaces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use petbase::{ObservationIndex, StatVector};
    ///
    /// let index = ObservationIndex::build(StatVector::new(0, 0, 0, 0), 100).unwrap();
    /// assert!(!index.is_empty());
    /// ```
    pub fn build(base: BaseStats, scaling_coefficient: i64) -> Result<Self, EngineError> {
        Self::build_with_spaces(
            Query::new(base, scaling_coefficient),
            default_distribution_space(),
            default_modifier_space(),
        )
    }

    /// Build the index for a query over explicitly constructed spaces.
    pub fn build_with_spaces(
        query: Query,
        distributions: &DistributionSpace,
        modifiers: &ModifierSpace,
    ) -> Result<Self, EngineError> {
        let evaluations = distributions.len() as u64 * modifiers.len() as u64;
        if evaluations > MAX_EVALUATIONS {
            return Err(EngineError::EnumerationLimit {
                evaluations,
                limit: MAX_EVALUATIONS,
            });
        }

        let entries = sweep(query, distributions, modifiers);

        Ok(Self {
            entries,
            point_total: distributions.point_total(),
            modifier_count: modifiers.len(),
            max_modifier: modifiers.max_modifier(),
        })
    }

    /// Observable outcomes present in the index.
    pub fn derived_stats(&self) -> impl Iterator<Item = &DerivedStat> {
        self.entries.keys()
    }

    /// Explanations for one outcome: modifier → distributions.
    pub fn explanations(&self, stat: &DerivedStat) -> Option<&HashMap<Modifier, Vec<Distribution>>> {
        self.entries.get(stat)
    }

    /// Number of distinct observable outcomes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the index holds no outcomes (possible only for empty
    /// spaces, which space construction already rejects).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The growth-point total of the distribution space used for the build.
    pub fn point_total(&self) -> i64 {
        self.point_total
    }

    /// Size of the modifier space used for the build.
    pub fn modifier_count(&self) -> usize {
        self.modifier_count
    }

    /// The best possible quality roll of the modifier space.
    pub fn max_modifier(&self) -> Modifier {
        self.max_modifier
    }
}

type Entries = HashMap<DerivedStat, HashMap<Modifier, Vec<Distribution>>>;

/// Evaluate one modifier against every distribution, grouping into `out`.
fn sweep_one_modifier(
    query: Query,
    modifier: Modifier,
    distributions: &DistributionSpace,
    out: &mut Entries,
) {
    for &dist in distributions.members() {
        let derived = derive_stats(query.base, dist, modifier, query.scaling_coefficient);
        out.entry(derived)
            .or_default()
            .entry(modifier)
            .or_default()
            .push(dist);
    }
}

#[cfg(not(feature = "parallel"))]
fn sweep(query: Query, distributions: &DistributionSpace, modifiers: &ModifierSpace) -> Entries {
    let mut entries = Entries::new();
    for &modifier in modifiers.members() {
        sweep_one_modifier(query, modifier, distributions, &mut entries);
    }
    entries
}

#[cfg(feature = "parallel")]
fn sweep(query: Query, distributions: &DistributionSpace, modifiers: &ModifierSpace) -> Entries {
    modifiers
        .members()
        .par_iter()
        .fold(Entries::new, |mut local, &modifier| {
            sweep_one_modifier(query, modifier, distributions, &mut local);
            local
        })
        .reduce(Entries::new, merge_entries)
}

/// Merge two shard-local index fragments. Append-only grouping by key, so
/// the merge is commutative up to per-key multiset equality.
#[cfg(feature = "parallel")]
fn merge_entries(mut left: Entries, right: Entries) -> Entries {
    for (derived, by_modifier) in right {
        let slot = left.entry(derived).or_default();
        for (modifier, mut dists) in by_modifier {
            slot.entry(modifier).or_default().append(&mut dists);
        }
    }
    left
}
