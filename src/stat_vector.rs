//! Stat vector module.
//!
//! Provides the `StatVector` type, an ordered integer 4-tuple in the fixed
//! order HP, Attack, Defense, Speed. Every domain entity in the engine —
//! base stats, growth distributions, quality modifiers, derived stats — is
//! a `StatVector`; the aliases in this module name the role a vector plays.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Number of stat slots. The slot order is fixed: HP, Attack, Defense, Speed.
pub const STAT_SLOTS: usize = 4;

/// An ordered integer 4-tuple in the fixed order HP, Attack, Defense, Speed.
///
/// `StatVector` is `Copy` and hashable, so it can be used directly as a map
/// key. Component access goes through the named accessors or `Index`.
///
/// # Examples
///
/// ```rust
/// use petbase::StatVector;
///
/// let v = StatVector::new(24, 3, 3, 12);
/// assert_eq!(v.hp(), 24);
/// assert_eq!(v.attack(), 3);
/// assert_eq!(v.defense(), 3);
/// assert_eq!(v.speed(), 12);
/// assert_eq!(v[3], 12);
/// ```
#[derive(
    Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct StatVector(pub [i64; STAT_SLOTS]);

/// Caller-supplied visible base stats, query-scoped.
pub type BaseStats = StatVector;

/// A random allocation of growth points across the 4 stat buckets.
/// Components are non-negative and sum to the space's point total.
pub type Distribution = StatVector;

/// A hidden per-stat quality roll drawn from a small discrete value set.
pub type Modifier = StatVector;

/// The observable level-1 stat tuple produced by the cross-stat formula.
pub type DerivedStat = StatVector;

impl StatVector {
    /// Create a vector from its four components in fixed order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use petbase::StatVector;
    ///
    /// let v = StatVector::new(1, 2, 3, 4);
    /// assert_eq!(v.components(), [1, 2, 3, 4]);
    /// ```
    pub fn new(hp: i64, attack: i64, defense: i64, speed: i64) -> Self {
        Self([hp, attack, defense, speed])
    }

    /// Create a vector with the same value in every slot.
    pub fn splat(value: i64) -> Self {
        Self([value; STAT_SLOTS])
    }

    /// HP component (slot 0).
    pub fn hp(&self) -> i64 {
        self.0[0]
    }

    /// Attack component (slot 1).
    pub fn attack(&self) -> i64 {
        self.0[1]
    }

    /// Defense component (slot 2).
    pub fn defense(&self) -> i64 {
        self.0[2]
    }

    /// Speed component (slot 3).
    pub fn speed(&self) -> i64 {
        self.0[3]
    }

    /// The raw component array in slot order.
    pub fn components(&self) -> [i64; STAT_SLOTS] {
        self.0
    }

    /// Sum of all components.
    ///
    /// For a `Distribution` this is the total number of growth points.
    pub fn component_sum(&self) -> i64 {
        self.0.iter().sum()
    }
}

impl From<[i64; STAT_SLOTS]> for StatVector {
    fn from(components: [i64; STAT_SLOTS]) -> Self {
        Self(components)
    }
}

impl Index<usize> for StatVector {
    type Output = i64;

    fn index(&self, slot: usize) -> &i64 {
        &self.0[slot]
    }
}

impl fmt::Display for StatVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}
