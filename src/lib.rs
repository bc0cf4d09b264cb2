//! # petbase - Deterministic Pet Quality Inference Engine
//!
//! A combinatorial inference engine for judging a freshly created pet:
//! given its visible base stats and growth-scaling coefficient, estimate
//! - the probability that its hidden per-stat quality roll is the best
//!   possible value (`base_chance`), and
//! - the unconditional probability of observing any given level-1 stat
//!   tuple at creation (`encounter_chance`).
//!
//! ## How it works
//!
//! A pet's observable level-1 stats are a deterministic function of four
//! inputs, two of them hidden:
//!
//! ```text
//! [BaseStats] + [Distribution] + [Modifier] --scale--> cross-stat formula --trunc--> [DerivedStat]
//! ```
//!
//! 1. **Spaces**: all 286 ways to allocate 10 growth points over the 4 stat
//!    buckets, and all 625 quality rolls from {−2..2}⁴, enumerated once per
//!    process.
//! 2. **Aggregation**: for one query, every (modifier, distribution) pair is
//!    pushed through the calculator and grouped by the observable tuple it
//!    produces. Integer truncation makes distinct pairs collide, which is
//!    exactly what gives the inference something to work with.
//! 3. **Inference**: multinomial-weighted distributions and uniform
//!    modifiers turn the grouped index into the two probabilities.
//!
//! Everything is a fresh, deterministic, single-shot batch computation:
//! same query, same answers, nothing persisted.
//!
//! ## Example
//!
//! ```rust
//! use petbase::{compute_inference, ObservationIndex, StatVector};
//!
//! // Visible inputs: base stats and the growth-scaling coefficient.
//! let index = ObservationIndex::build(StatVector::new(0, 0, 0, 0), 100).unwrap();
//! let results = compute_inference(&index);
//!
//! // The best roll (+2 everywhere) with all points on Speed lands here:
//! let result = results.get(&StatVector::new(24, 3, 3, 12)).unwrap();
//! assert!(result.is_max);
//!
//! // Probability mass over all observable outcomes is conserved.
//! let mass: f64 = results.values().map(|r| r.encounter_chance).sum();
//! assert!((mass - 1.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`stat_vector`] - The fixed-order (HP, Attack, Defense, Speed) tuple
//! - [`space`] - Combinatorial space generators and process-wide defaults
//! - [`formula`] - The derived-stat calculator (exact integer arithmetic)
//! - [`index`] - The combinatorial aggregator and observation index
//! - [`inference`] - The probability model
//! - [`preset`] - Tab-delimited preset store loader (caller boundary)
//! - [`report`] - Plain-text result rendering (caller boundary)
//! - [`error`] - Error types
//!
//! ## Features
//!
//! - `parallel`: shard the modifier axis of the cross product over a rayon
//!   thread pool. Results are observably identical to the sequential build.

pub mod error;
pub mod formula;
pub mod index;
pub mod inference;
pub mod preset;
pub mod report;
pub mod space;
pub mod stat_vector;

// Re-export main types for convenience
pub use error::{EngineError, PresetError};
pub use formula::derive_stats;
pub use index::{ObservationIndex, Query, MAX_EVALUATIONS};
pub use inference::{compute_inference, distribution_weight, InferenceResult};
pub use preset::{parse_presets, Preset};
pub use report::{render_report, SortKey};
pub use space::{
    default_distribution_space, default_modifier_space, DistributionSpace, ModifierSpace,
};
pub use stat_vector::{
    BaseStats, DerivedStat, Distribution, Modifier, StatVector, STAT_SLOTS,
};
