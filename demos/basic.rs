//! Basic Inference Example
//!
//! Judge a freshly created pet: for given base stats and a growth-scaling
//! coefficient, list every observable level-1 stat tuple the best possible
//! quality roll can produce, with the chance the roll really is the best.

use petbase::{compute_inference, render_report, ObservationIndex, SortKey, StatVector};

fn main() {
    // Visible inputs: base stats (HP, Attack, Defense, Speed) and the
    // growth-scaling coefficient as an integer percentage.
    let base = StatVector::new(3, 5, 4, 6);
    let coefficient = 110;

    let index = ObservationIndex::build(base, coefficient).expect("default spaces fit the cap");
    let results = compute_inference(&index);

    println!("Query: base {base}, coefficient {coefficient}");
    println!("Observable outcomes: {}", index.len());
    println!();
    println!("Chance the hidden roll is max (+2, +2, +2, +2), per outcome:");
    print!(
        "{}",
        render_report(&results, SortKey::BaseChance, true)
    );
}
