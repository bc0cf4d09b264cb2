//! Error types for the inference engine.
//!
//! The core has exactly one internal failure class: degenerate or oversized
//! parameterization, caught before any enumeration starts. Everything else in
//! the core is a total function. Malformed user input is a boundary concern
//! and is reported through `PresetError` by the preset loader, never by the
//! engine itself.

use thiserror::Error;

/// Errors from space construction and index building.
///
/// # Examples
///
/// ```rust
/// use petbase::error::EngineError;
///
/// let err = EngineError::NegativeTotal { total: -3 };
/// assert!(err.to_string().contains("-3"));
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A distribution space was requested with a negative point total.
    #[error("Distribution total must be non-negative, got {total}")]
    NegativeTotal { total: i64 },

    /// A space was requested with zero or negative buckets/slots.
    #[error("Bucket count must be positive, got {buckets}")]
    NonPositiveBuckets { buckets: i64 },

    /// A modifier space was requested with an empty value set.
    #[error("Modifier value set must not be empty")]
    EmptyModifierValues,

    /// A distribution space was requested with a point total too large for
    /// exact probability weights (4^total and the per-outcome sums of
    /// multinomial coefficients must fit in 128 bits).
    #[error("Point total {total} exceeds the exact-arithmetic limit of {limit}")]
    PointTotalTooLarge { total: i64, limit: i64 },

    /// A single space would materialize more members than the cap.
    ///
    /// `members` saturates at `u64::MAX` when the true count does not even
    /// fit the counter.
    #[error("Space of {members} members exceeds the cap of {limit}")]
    SpaceTooLarge { members: u64, limit: u64 },

    /// The cross product of the two spaces exceeds the evaluation cap.
    ///
    /// Enumeration work is bounded up front instead of silently running
    /// unbounded for extreme parameters.
    #[error("Enumeration of {evaluations} pairs exceeds the cap of {limit}")]
    EnumerationLimit { evaluations: u64, limit: u64 },
}

/// Errors from parsing the tab-delimited preset resource.
///
/// These never originate inside the engine; they are produced at the
/// caller-facing boundary in [`crate::preset`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PresetError {
    /// A row did not have exactly 6 tab-separated fields.
    #[error("Line {line}: expected 6 tab-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    /// A numeric field could not be parsed as an integer.
    #[error("Line {line}, field '{field}': '{value}' is not an integer")]
    NotAnInteger {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// A row had an empty display name.
    #[error("Line {line}: preset name is empty")]
    EmptyName { line: usize },
}
