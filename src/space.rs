//! Combinatorial space generators.
//!
//! Two fixed domains drive the engine's exhaustive search:
//!
//! - [`DistributionSpace`]: every way to allocate a point total across the
//!   4 stat buckets (stars and bars; 286 members at the default total of 10).
//! - [`ModifierSpace`]: the full Cartesian product of a quality-roll value
//!   set over the 4 slots (625 members at the default set −2..=2).
//!
//! Both spaces are pure constants once built. The default-parameter spaces
//! are lazily initialized process-wide singletons shared by reference across
//! queries; custom parameterizations can be built explicitly and fail fast
//! on degenerate inputs.

use crate::error::EngineError;
use crate::stat_vector::{Distribution, Modifier, StatVector, STAT_SLOTS};
use std::sync::OnceLock;

/// Default number of growth points distributed at creation.
pub const DEFAULT_POINT_TOTAL: i64 = 10;

/// Default quality-roll value set.
pub const DEFAULT_MODIFIER_VALUES: [i64; 5] = [-2, -1, 0, 1, 2];

/// Largest point total [`DistributionSpace::new`] accepts.
///
/// The probability model carries 4^total and per-outcome sums of
/// multinomial coefficients as exact `u128` ratios; totals beyond this
/// limit could overflow that arithmetic under the evaluation cap.
pub const MAX_POINT_TOTAL: i64 = 50;

/// Largest member count a single space may materialize.
///
/// Enumeration fails with [`EngineError::SpaceTooLarge`] before any member
/// is produced, instead of silently attempting unbounded work.
pub const MAX_SPACE_MEMBERS: u64 = 10_000_000;

/// All non-negative integer sequences of length `buckets` summing to `total`.
///
/// Exhaustive and duplicate-free; correctness does not depend on the order
/// in which members are produced. Fails fast on a negative total, a
/// non-positive bucket count, or a member count over
/// [`MAX_SPACE_MEMBERS`] — all before any enumeration starts.
///
/// # Examples
///
/// ```rust
/// use petbase::space::enumerate_distributions;
///
/// let space = enumerate_distributions(10, 4).unwrap();
/// assert_eq!(space.len(), 286); // C(13, 3)
/// assert!(space.iter().all(|d| d.iter().sum::<i64>() == 10));
/// ```
pub fn enumerate_distributions(total: i64, buckets: i64) -> Result<Vec<Vec<i64>>, EngineError> {
    if total < 0 {
        return Err(EngineError::NegativeTotal { total });
    }
    if buckets <= 0 {
        return Err(EngineError::NonPositiveBuckets { buckets });
    }
    check_member_count(stars_and_bars_count(total, buckets))?;

    let mut members = Vec::new();
    let mut current = Vec::with_capacity(buckets as usize);
    fill_buckets(total, buckets as usize, &mut current, &mut members);
    Ok(members)
}

/// Predicted member count before enumeration: C(total + buckets − 1,
/// buckets − 1), `None` on `u128` overflow.
fn stars_and_bars_count(total: i64, buckets: i64) -> Option<u128> {
    let n = (total as u128).checked_add(buckets as u128 - 1)?;
    // Symmetry keeps the loop short whichever parameter is the large one.
    let k = (buckets as u128 - 1).min(total as u128);
    let mut count: u128 = 1;
    for i in 1..=k {
        count = count.checked_mul(n - k + i)? / i;
    }
    Some(count)
}

/// Reject a predicted member count over [`MAX_SPACE_MEMBERS`] (or one that
/// overflowed the prediction itself).
fn check_member_count(predicted: Option<u128>) -> Result<(), EngineError> {
    match predicted {
        Some(count) if count <= MAX_SPACE_MEMBERS as u128 => Ok(()),
        other => Err(EngineError::SpaceTooLarge {
            members: other
                .and_then(|count| u64::try_from(count).ok())
                .unwrap_or(u64::MAX),
            limit: MAX_SPACE_MEMBERS,
        }),
    }
}

/// Recursively assign the remaining points to the remaining buckets.
/// The last bucket takes whatever is left, so every emitted sequence sums
/// to the requested total exactly once.
fn fill_buckets(remaining: i64, buckets: usize, current: &mut Vec<i64>, out: &mut Vec<Vec<i64>>) {
    if buckets == 1 {
        current.push(remaining);
        out.push(current.clone());
        current.pop();
        return;
    }
    for points in 0..=remaining {
        current.push(points);
        fill_buckets(remaining - points, buckets - 1, current, out);
        current.pop();
    }
}

/// The full Cartesian product of `values` repeated `slots` times.
///
/// Fails fast on an empty value set, a non-positive slot count, or a
/// member count over [`MAX_SPACE_MEMBERS`]. The product always contains
/// the all-maximum sequence.
///
/// # Examples
///
/// ```rust
/// use petbase::space::enumerate_modifiers;
///
/// let space = enumerate_modifiers(&[-2, -1, 0, 1, 2], 4).unwrap();
/// assert_eq!(space.len(), 625); // 5^4
/// assert!(space.contains(&vec![2, 2, 2, 2]));
/// ```
pub fn enumerate_modifiers(values: &[i64], slots: i64) -> Result<Vec<Vec<i64>>, EngineError> {
    if values.is_empty() {
        return Err(EngineError::EmptyModifierValues);
    }
    if slots <= 0 {
        return Err(EngineError::NonPositiveBuckets { buckets: slots });
    }
    check_member_count(
        u32::try_from(slots)
            .ok()
            .and_then(|slots| (values.len() as u128).checked_pow(slots)),
    )?;

    let mut members = vec![Vec::new()];
    for _ in 0..slots {
        let mut next = Vec::with_capacity(members.len() * values.len());
        for prefix in &members {
            for &value in values {
                let mut extended = prefix.clone();
                extended.push(value);
                next.push(extended);
            }
        }
        members = next;
    }
    Ok(members)
}

/// The space of all growth-point distributions over the 4 stat buckets.
///
/// # Examples
///
/// ```rust
/// use petbase::DistributionSpace;
///
/// let space = DistributionSpace::new(10).unwrap();
/// assert_eq!(space.len(), 286);
/// assert_eq!(space.point_total(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct DistributionSpace {
    point_total: i64,
    members: Vec<Distribution>,
}

impl DistributionSpace {
    /// Enumerate the space for a given point total over the 4 buckets.
    ///
    /// Totals above [`MAX_POINT_TOTAL`] are rejected: this space feeds the
    /// probability model, whose exact weight arithmetic is only guaranteed
    /// up to that limit.
    pub fn new(point_total: i64) -> Result<Self, EngineError> {
        if point_total > MAX_POINT_TOTAL {
            return Err(EngineError::PointTotalTooLarge {
                total: point_total,
                limit: MAX_POINT_TOTAL,
            });
        }
        let members = enumerate_distributions(point_total, STAT_SLOTS as i64)?
            .into_iter()
            .map(|seq| StatVector([seq[0], seq[1], seq[2], seq[3]]))
            .collect();
        Ok(Self {
            point_total,
            members,
        })
    }

    /// The point total every member sums to.
    pub fn point_total(&self) -> i64 {
        self.point_total
    }

    /// Number of members (C(total + 3, 3)).
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the space is empty. Only possible via a custom total of a
    /// degenerate kind that `new` already rejects, so in practice false.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The members, in enumeration order.
    pub fn members(&self) -> &[Distribution] {
        &self.members
    }
}

/// The space of all quality-roll modifiers over the 4 stat slots.
///
/// # Examples
///
/// ```rust
/// use petbase::{ModifierSpace, StatVector};
///
/// let space = ModifierSpace::new(&[-2, -1, 0, 1, 2]).unwrap();
/// assert_eq!(space.len(), 625);
/// assert_eq!(space.max_modifier(), StatVector::new(2, 2, 2, 2));
/// ```
#[derive(Debug, Clone)]
pub struct ModifierSpace {
    members: Vec<Modifier>,
    max_modifier: Modifier,
}

impl ModifierSpace {
    /// Enumerate the Cartesian product of `values` over the 4 slots.
    pub fn new(values: &[i64]) -> Result<Self, EngineError> {
        let members: Vec<Modifier> = enumerate_modifiers(values, STAT_SLOTS as i64)?
            .into_iter()
            .map(|seq| StatVector([seq[0], seq[1], seq[2], seq[3]]))
            .collect();
        // values is non-empty here
        let best = values.iter().copied().max().unwrap_or(0);
        Ok(Self {
            members,
            max_modifier: StatVector::splat(best),
        })
    }

    /// Number of members (|values|^4).
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the space is empty; `new` rejects the only producing input.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The members, in enumeration order.
    pub fn members(&self) -> &[Modifier] {
        &self.members
    }

    /// The best possible roll: every slot at the maximum value.
    pub fn max_modifier(&self) -> Modifier {
        self.max_modifier
    }
}

static DEFAULT_DISTRIBUTIONS: OnceLock<DistributionSpace> = OnceLock::new();
static DEFAULT_MODIFIERS: OnceLock<ModifierSpace> = OnceLock::new();

/// Process-wide distribution space for the default point total (10).
///
/// Built once on first use and shared by reference across all queries.
pub fn default_distribution_space() -> &'static DistributionSpace {
    DEFAULT_DISTRIBUTIONS.get_or_init(|| {
        DistributionSpace::new(DEFAULT_POINT_TOTAL).expect("default parameters are valid")
    })
}

/// Process-wide modifier space for the default value set (−2..=2).
pub fn default_modifier_space() -> &'static ModifierSpace {
    DEFAULT_MODIFIERS.get_or_init(|| {
        ModifierSpace::new(&DEFAULT_MODIFIER_VALUES).expect("default parameters are valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_distribution_space_size() {
        // Stars and bars: C(10 + 3, 3) = 286.
        assert_eq!(default_distribution_space().len(), 286);
    }

    #[test]
    fn test_default_modifier_space_size() {
        assert_eq!(default_modifier_space().len(), 625);
    }

    #[test]
    fn test_distributions_sum_to_total_and_are_unique() {
        let space = DistributionSpace::new(7).unwrap();
        let unique: HashSet<_> = space.members().iter().collect();
        assert_eq!(unique.len(), space.len());
        assert!(space.members().iter().all(|d| d.component_sum() == 7));
        assert!(space.members().iter().all(|d| d.components().iter().all(|&x| x >= 0)));
    }

    #[test]
    fn test_modifier_space_contains_max() {
        let space = default_modifier_space();
        assert!(space.members().contains(&StatVector::splat(2)));
        assert_eq!(space.max_modifier(), StatVector::splat(2));
    }

    #[test]
    fn test_zero_total_is_a_single_empty_allocation() {
        let space = DistributionSpace::new(0).unwrap();
        assert_eq!(space.len(), 1);
        assert_eq!(space.members()[0], StatVector::splat(0));
    }

    #[test]
    fn test_degenerate_parameters_fail_fast() {
        assert!(matches!(
            DistributionSpace::new(-1),
            Err(EngineError::NegativeTotal { total: -1 })
        ));
        assert!(matches!(
            ModifierSpace::new(&[]),
            Err(EngineError::EmptyModifierValues)
        ));
    }

    #[test]
    fn test_degenerate_generator_parameters() {
        assert!(matches!(
            enumerate_distributions(-1, 4),
            Err(EngineError::NegativeTotal { total: -1 })
        ));
        assert!(matches!(
            enumerate_distributions(10, 0),
            Err(EngineError::NonPositiveBuckets { buckets: 0 })
        ));
        assert!(matches!(
            enumerate_modifiers(&[], 4),
            Err(EngineError::EmptyModifierValues)
        ));
        assert!(matches!(
            enumerate_modifiers(&[1], -2),
            Err(EngineError::NonPositiveBuckets { buckets: -2 })
        ));
    }

    #[test]
    fn test_point_total_limit() {
        // 4^64 would not fit the probability model's u128 arithmetic.
        assert!(matches!(
            DistributionSpace::new(64),
            Err(EngineError::PointTotalTooLarge { total: 64, limit: MAX_POINT_TOTAL })
        ));
        // The largest admitted total still enumerates: C(53, 3) members.
        let space = DistributionSpace::new(MAX_POINT_TOTAL).unwrap();
        assert_eq!(space.len(), 23_426);
    }

    #[test]
    fn test_oversize_spaces_are_rejected_before_enumeration() {
        // C(10^7 + 3, 3) ≈ 1.7e20 members; must fail fast, not allocate.
        assert!(matches!(
            enumerate_distributions(10_000_000, 4),
            Err(EngineError::SpaceTooLarge { .. })
        ));
        // Extreme bucket counts overflow even the member-count prediction.
        assert!(matches!(
            enumerate_distributions(i64::MAX - 1, i64::MAX - 1),
            Err(EngineError::SpaceTooLarge { members: u64::MAX, .. })
        ));
        // 100^4 = 10^8 modifiers is over the member cap.
        let values: Vec<i64> = (0..100).collect();
        assert!(matches!(
            ModifierSpace::new(&values),
            Err(EngineError::SpaceTooLarge { members: 100_000_000, .. })
        ));
        // A huge slot count fails in the prediction, not in enumeration.
        assert!(matches!(
            enumerate_modifiers(&[0, 1], 1 << 40),
            Err(EngineError::SpaceTooLarge { members: u64::MAX, .. })
        ));
    }

    #[test]
    fn test_singleton_spaces_are_shared() {
        let a = default_distribution_space() as *const DistributionSpace;
        let b = default_distribution_space() as *const DistributionSpace;
        assert_eq!(a, b);
    }
}
