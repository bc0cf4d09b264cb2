//! Report Rendering Example
//!
//! Render the same inference two ways: sorted by the chance the hidden roll
//! is max, and sorted by the unconditional encounter chance.

use petbase::{compute_inference, render_report, ObservationIndex, SortKey, StatVector};

fn main() {
    let index =
        ObservationIndex::build(StatVector::new(0, 0, 0, 0), 100).expect("default spaces fit");
    let results = compute_inference(&index);

    println!("=== Max-roll outcomes by base chance ===");
    let by_base = render_report(&results, SortKey::BaseChance, true);
    for line in by_base.lines().take(10) {
        println!("{line}");
    }

    println!();
    println!("=== All outcomes by encounter chance (top 10) ===");
    let by_encounter = render_report(&results, SortKey::EncounterChance, false);
    for line in by_encounter.lines().take(10) {
        println!("{line}");
    }
}
