//! Preset Store Example
//!
//! Load pet kinds from the tab-delimited preset resource and run the
//! inference for each one, printing the single most likely max-roll
//! outcome per pet as JSON.

use petbase::{compute_inference, parse_presets, ObservationIndex};

const PRESETS: &str = "\
# name\tcoefficient\thp\tattack\tdefense\tspeed
Golden Wolf\t110\t3\t5\t4\t6
Cave Bear\t95\t6\t4\t5\t2
Swift Hare\t100\t1\t2\t2\t8
";

fn main() {
    let presets = match parse_presets(PRESETS) {
        Ok(presets) => presets,
        Err(err) => {
            eprintln!("Preset resource is malformed: {err}");
            return;
        }
    };

    for preset in presets {
        let index = ObservationIndex::build(preset.base, preset.scaling_coefficient)
            .expect("default spaces fit the cap");
        let results = compute_inference(&index);

        // Most likely outcome among those the max roll can explain.
        let best = results
            .iter()
            .filter(|(_, r)| r.is_max)
            .max_by(|(stat_a, a), (stat_b, b)| {
                a.encounter_chance
                    .partial_cmp(&b.encounter_chance)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| stat_b.cmp(stat_a))
            });

        match best {
            Some((stat, result)) => {
                let row = serde_json::json!({
                    "preset": preset.name,
                    "stat": stat,
                    "base_chance": result.base_chance,
                    "encounter_chance": result.encounter_chance,
                });
                println!("{row}");
            }
            None => println!("{}: no max-roll outcomes", preset.name),
        }
    }
}
