//! Plain-text result rendering.
//!
//! Consumes the inference map plus a sort key and a max-only filter, and
//! renders one line per observable outcome with its percentage. Ordering is
//! deterministic: descending by the chosen measure, ties broken by the stat
//! tuple.

use crate::inference::InferenceResult;
use crate::stat_vector::DerivedStat;
use std::collections::HashMap;
use std::fmt::Write;

/// Which measure a report is sorted (and displayed) by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Sort by the chance that the hidden roll is the maximum.
    #[default]
    BaseChance,
    /// Sort by the unconditional creation probability.
    EncounterChance,
}

impl SortKey {
    fn measure(self, result: &InferenceResult) -> f64 {
        match self {
            SortKey::BaseChance => result.base_chance,
            SortKey::EncounterChance => result.encounter_chance,
        }
    }
}

/// Render the inference map as readable text.
///
/// With `max_only` set, outcomes that the maximum modifier cannot explain
/// are dropped before rendering.
///
/// # Examples
///
/// ```rust
/// use petbase::{compute_inference, render_report, ObservationIndex, SortKey, StatVector};
///
/// let index = ObservationIndex::build(StatVector::new(0, 0, 0, 0), 100).unwrap();
/// let results = compute_inference(&index);
/// let text = render_report(&results, SortKey::BaseChance, true);
/// assert!(text.lines().count() > 0);
/// assert!(text.contains('%'));
/// ```
pub fn render_report(
    results: &HashMap<DerivedStat, InferenceResult>,
    sort_key: SortKey,
    max_only: bool,
) -> String {
    let mut rows: Vec<(&DerivedStat, &InferenceResult)> = results
        .iter()
        .filter(|(_, result)| !max_only || result.is_max)
        .collect();

    rows.sort_by(|(stat_a, a), (stat_b, b)| {
        sort_key
            .measure(b)
            .partial_cmp(&sort_key.measure(a))
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| stat_a.cmp(stat_b))
    });

    let mut out = String::new();
    for (stat, result) in rows {
        let percent = sort_key.measure(result) * 100.0;
        let _ = writeln!(out, "{stat}: {percent:.2}%");
    }
    out
}
