//! The derived-stat calculator.
//!
//! A pure, total mapping from (base stats, growth distribution, quality
//! modifier, scaling coefficient) to the observable level-1 stat tuple.
//!
//! The final truncation step is load-bearing: it is the only mechanism by
//! which distinct (modifier, distribution) pairs collapse onto the same
//! observable tuple, which is what makes the later probabilistic inference
//! meaningful. To keep collisions stable near integer boundaries, the whole
//! computation is exact integer arithmetic: each stat is carried as a
//! numerator over a constant denominator and divided exactly once at the
//! end. Rust's `i64` division truncates toward zero, which is the required
//! behavior for negative intermediates as well.

use crate::stat_vector::{BaseStats, DerivedStat, Distribution, Modifier, StatVector, STAT_SLOTS};

/// The percentage scaling denominator.
const PERCENT: i64 = 100;

/// Common denominator for the cross-stat rows with 0.1 and 0.05 weights
/// (0.1 = 2/20, 0.05 = 1/20), on top of the percentage scaling.
const CROSS_DEN: i64 = PERCENT * 20;

/// Compute the observable level-1 stat tuple.
///
/// Steps, in slot order HP, Attack, Defense, Speed:
///
/// 1. `combined[i] = base[i] + dist[i] + modifier[i]`
/// 2. scale every slot by `coefficient` percent
/// 3. apply the fixed cross-stat formula:
///    - HP'  = 4·s0 + s1 + s2 + s3
///    - Atk' = 0.1·s0 + s1 + 0.1·s2 + 0.05·s3
///    - Def' = 0.1·s0 + 0.1·s1 + s2 + 0.05·s3
///    - Spd' = s3
/// 4. truncate each output toward zero
///
/// # Examples
///
/// ```rust
/// use petbase::{derive_stats, StatVector};
///
/// let derived = derive_stats(
///     StatVector::new(0, 0, 0, 0),
///     StatVector::new(0, 0, 0, 10),
///     StatVector::new(2, 2, 2, 2),
///     100,
/// );
/// assert_eq!(derived, StatVector::new(24, 3, 3, 12));
/// ```
pub fn derive_stats(
    base: BaseStats,
    dist: Distribution,
    modifier: Modifier,
    coefficient: i64,
) -> DerivedStat {
    // Per-slot numerators over a denominator of 100.
    let mut n = [0i64; STAT_SLOTS];
    for slot in 0..STAT_SLOTS {
        n[slot] = (base[slot] + dist[slot] + modifier[slot]) * coefficient;
    }

    let hp = (4 * n[0] + n[1] + n[2] + n[3]) / PERCENT;
    let attack = (2 * n[0] + 20 * n[1] + 2 * n[2] + n[3]) / CROSS_DEN;
    let defense = (2 * n[0] + 2 * n[1] + 20 * n[2] + n[3]) / CROSS_DEN;
    let speed = n[3] / PERCENT;

    StatVector::new(hp, attack, defense, speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        // combined = (2, 2, 2, 12), coefficient 100 leaves it unscaled.
        let derived = derive_stats(
            StatVector::new(0, 0, 0, 0),
            StatVector::new(0, 0, 0, 10),
            StatVector::splat(2),
            100,
        );
        assert_eq!(derived, StatVector::new(24, 3, 3, 12));
    }

    #[test]
    fn test_scaling_coefficient_applies_before_the_formula() {
        let base = StatVector::new(10, 10, 10, 10);
        let dist = StatVector::new(10, 0, 0, 0);
        let modifier = StatVector::splat(0);
        // combined = (20, 10, 10, 10); at 50% scaled = (10, 5, 5, 5).
        // HP' = 40 + 5 + 5 + 5 = 55; Spd' = 5.
        let derived = derive_stats(base, dist, modifier, 50);
        assert_eq!(derived.hp(), 55);
        assert_eq!(derived.speed(), 5);
        // Atk' = trunc(1 + 5 + 0.5 + 0.25) = 6.
        assert_eq!(derived.attack(), 6);
    }

    #[test]
    fn test_truncation_is_toward_zero_for_negative_values() {
        // combined = (-2, -2, -2, -2) at 100%: Spd' = trunc(-2) = -2 and
        // Atk' = trunc(-0.2 - 2 - 0.2 - 0.1) = trunc(-2.5) = -2, not -3.
        let derived = derive_stats(
            StatVector::splat(0),
            StatVector::splat(0),
            StatVector::splat(-2),
            100,
        );
        assert_eq!(derived.speed(), -2);
        assert_eq!(derived.attack(), -2);
        assert_eq!(derived.defense(), -2);
        assert_eq!(derived.hp(), -14);
    }

    #[test]
    fn test_exact_boundaries_do_not_drift() {
        // combined = (2, 2, 2, 12) puts Atk' exactly on 3.0; exact
        // arithmetic must not let it land at 2 via float error.
        let derived = derive_stats(
            StatVector::splat(0),
            StatVector::new(0, 0, 0, 10),
            StatVector::splat(2),
            100,
        );
        assert_eq!(derived.attack(), 3);
        assert_eq!(derived.defense(), 3);
    }

    #[test]
    fn test_pure_and_deterministic() {
        let base = StatVector::new(5, 3, 8, 1);
        let dist = StatVector::new(4, 4, 1, 1);
        let modifier = StatVector::new(-1, 2, 0, 1);
        let a = derive_stats(base, dist, modifier, 123);
        let b = derive_stats(base, dist, modifier, 123);
        assert_eq!(a, b);
    }
}
