//! The probability model.
//!
//! Turns an [`ObservationIndex`](crate::ObservationIndex) into two numbers
//! per observable outcome:
//!
//! - **encounter chance** — the unconditional probability of seeing that
//!   tuple at creation, integrating over every compatible (modifier,
//!   distribution) explanation. Distributions are weighted by the
//!   multinomial probability of their point allocation; modifiers are
//!   uniform over the modifier space.
//! - **base chance** — of all recorded explanations of the tuple, the
//!   fraction (by raw occurrence count) carrying the best possible quality
//!   roll. A probability-weighted posterior is a defensible alternative
//!   definition; this crate deliberately uses the count ratio and keeps the
//!   two measures separate.
//!
//! Weights are exact integer ratios (`u128` factorial products over
//! `4^total`) until the final conversion to `f64`.

use crate::index::ObservationIndex;
use crate::stat_vector::{DerivedStat, Distribution, STAT_SLOTS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inference output for one observable stat tuple.
///
/// # Examples
///
/// ```rust
/// use petbase::{compute_inference, ObservationIndex, StatVector};
///
/// let index = ObservationIndex::build(StatVector::new(0, 0, 0, 0), 100).unwrap();
/// let results = compute_inference(&index);
/// let best = results.get(&StatVector::new(24, 3, 3, 12)).unwrap();
/// assert!(best.is_max);
/// assert!(best.base_chance > 0.0 && best.base_chance <= 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    /// Fraction of explanations that carry the maximum modifier.
    pub base_chance: f64,
    /// Unconditional probability of observing this tuple at creation.
    pub encounter_chance: f64,
    /// Whether the maximum modifier explains this tuple at all.
    pub is_max: bool,
}

/// Exact multinomial weight of a distribution, as an integer ratio.
///
/// Numerator: total! / (d0!·d1!·d2!·d3!), computed as a product of
/// binomials so intermediates stay small. Denominator: 4^total. The ratio
/// is the probability that `total` independent uniform draws over the 4
/// buckets land exactly on `d`.
fn multinomial_coefficient(dist: &Distribution) -> u128 {
    let mut remaining: u128 = dist.component_sum() as u128;
    let mut coefficient: u128 = 1;
    for slot in 0..STAT_SLOTS {
        coefficient *= binomial(remaining, dist[slot] as u128);
        remaining -= dist[slot] as u128;
    }
    coefficient
}

fn binomial(n: u128, k: u128) -> u128 {
    let mut result: u128 = 1;
    for i in 1..=k {
        result = result * (n - k + i) / i;
    }
    result
}

/// The probability that `total` uniform draws over the 4 buckets produce
/// exactly the given allocation.
///
/// Components must be non-negative and sum to at most
/// [`MAX_POINT_TOTAL`](crate::space::MAX_POINT_TOTAL); members of a
/// [`DistributionSpace`](crate::DistributionSpace) always qualify. The
/// precondition is checked in debug builds.
///
/// # Examples
///
/// ```rust
/// use petbase::{distribution_weight, StatVector};
///
/// // (10, 0, 0, 0) needs all ten draws in one bucket: (1/4)^10.
/// let w = distribution_weight(&StatVector::new(10, 0, 0, 0));
/// assert!((w - 0.25f64.powi(10)).abs() < 1e-12);
/// ```
pub fn distribution_weight(dist: &Distribution) -> f64 {
    debug_assert!(
        dist.components().iter().all(|&points| points >= 0),
        "distribution components must be non-negative: {dist}"
    );
    debug_assert!(
        dist.component_sum() <= crate::space::MAX_POINT_TOTAL,
        "distribution total {} exceeds the exact-arithmetic limit",
        dist.component_sum()
    );
    let total = dist.component_sum() as u32;
    let denominator = (STAT_SLOTS as u128).pow(total);
    multinomial_coefficient(dist) as f64 / denominator as f64
}

/// Compute both probability measures for every outcome in the index.
///
/// Every key present in the index has at least one contributing pair, so
/// the occurrence-count denominator is never zero; it is guarded anyway.
///
/// # Examples
///
/// ```rust
/// use petbase::{compute_inference, ObservationIndex, StatVector};
///
/// let index = ObservationIndex::build(StatVector::new(2, 2, 2, 2), 100).unwrap();
/// let results = compute_inference(&index);
/// let mass: f64 = results.values().map(|r| r.encounter_chance).sum();
/// assert!((mass - 1.0).abs() < 1e-9);
/// ```
pub fn compute_inference(index: &ObservationIndex) -> HashMap<DerivedStat, InferenceResult> {
    let modifier_count = index.modifier_count() as f64;
    let max_modifier = index.max_modifier();
    let denominator = (STAT_SLOTS as u128).pow(index.point_total() as u32);

    let mut results = HashMap::new();
    for derived in index.derived_stats() {
        let Some(explanations) = index.explanations(derived) else {
            continue;
        };

        // Exact numerator of Σ_m Σ_d weight(d); one shared denominator.
        let mut weight_numerator: u128 = 0;
        let mut occurrences: u64 = 0;
        let mut max_occurrences: u64 = 0;
        for (modifier, dists) in explanations {
            occurrences += dists.len() as u64;
            if *modifier == max_modifier {
                max_occurrences = dists.len() as u64;
            }
            for dist in dists {
                weight_numerator += multinomial_coefficient(dist);
            }
        }

        let encounter_chance =
            weight_numerator as f64 / denominator as f64 / modifier_count;
        let base_chance = if occurrences == 0 {
            0.0
        } else {
            max_occurrences as f64 / occurrences as f64
        };

        results.insert(
            *derived,
            InferenceResult {
                base_chance,
                encounter_chance,
                is_max: max_occurrences > 0,
            },
        );
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::default_distribution_space;
    use crate::stat_vector::StatVector;

    #[test]
    fn test_multinomial_extremes() {
        // All points in one bucket: exactly one arrangement.
        assert_eq!(multinomial_coefficient(&StatVector::new(10, 0, 0, 0)), 1);
        // 10! / (4!·3!·2!·1!) = 12600.
        assert_eq!(multinomial_coefficient(&StatVector::new(4, 3, 2, 1)), 12_600);
    }

    #[test]
    fn test_distribution_weights_sum_to_one() {
        let mass: f64 = default_distribution_space()
            .members()
            .iter()
            .map(distribution_weight)
            .sum();
        assert!((mass - 1.0).abs() < 1e-9, "mass was {mass}");
    }

    #[test]
    fn test_encounter_mass_is_conserved() {
        let index = ObservationIndex::build(StatVector::new(0, 0, 0, 0), 100).unwrap();
        let results = compute_inference(&index);
        let mass: f64 = results.values().map(|r| r.encounter_chance).sum();
        assert!((mass - 1.0).abs() < 1e-9, "mass was {mass}");
    }

    #[test]
    fn test_base_chance_bounds_and_is_max() {
        let index = ObservationIndex::build(StatVector::new(3, 5, 4, 6), 110).unwrap();
        let results = compute_inference(&index);
        for (derived, result) in &results {
            assert!(
                (0.0..=1.0).contains(&result.base_chance),
                "base chance {} out of range for {derived}",
                result.base_chance
            );
            assert_eq!(result.is_max, result.base_chance > 0.0);
        }
        assert!(results.values().any(|r| r.is_max));
        assert!(results.values().any(|r| !r.is_max));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-negative")]
    fn test_negative_components_are_rejected_in_debug() {
        distribution_weight(&StatVector::new(-1, 5, 3, 3));
    }

    #[test]
    fn test_weights_stay_exact_at_the_total_limit() {
        use crate::space::{DistributionSpace, MAX_POINT_TOTAL};

        // Σ multinomial(d) over the space is exactly 4^total, so the mass
        // must come out at 1.0 even at the largest admitted total.
        let space = DistributionSpace::new(MAX_POINT_TOTAL).unwrap();
        let mass: f64 = space.members().iter().map(distribution_weight).sum();
        assert!((mass - 1.0).abs() < 1e-9, "mass was {mass}");
    }

    #[test]
    fn test_max_only_outcome_has_full_base_chance() {
        // With a one-member modifier space every outcome is explained only
        // by that (maximum) modifier.
        use crate::index::Query;
        use crate::space::{DistributionSpace, ModifierSpace};

        let distributions = DistributionSpace::new(10).unwrap();
        let modifiers = ModifierSpace::new(&[2]).unwrap();
        let index = ObservationIndex::build_with_spaces(
            Query::new(StatVector::splat(0), 100),
            &distributions,
            &modifiers,
        )
        .unwrap();
        let results = compute_inference(&index);
        assert!(results.values().all(|r| r.is_max && r.base_chance == 1.0));
    }
}
