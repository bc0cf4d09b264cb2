//! Preset store loader.
//!
//! The preset resource is a flat tab-delimited text document: one row per
//! pet kind, mapping a display name to five integers — the growth-scaling
//! coefficient followed by the HP, Attack, Defense and Speed base stats.
//! A caller looks up a row and hands its numbers to
//! [`ObservationIndex::build`](crate::ObservationIndex::build).
//!
//! All validation lives here, at the boundary. Non-numeric entries, wrong
//! field counts and empty names are reported as [`PresetError`] with line
//! context and never reach the engine.

use crate::error::PresetError;
use crate::index::Query;
use crate::stat_vector::{BaseStats, StatVector};

/// One row of the preset resource.
///
/// # Examples
///
/// ```rust
/// use petbase::preset::Preset;
///
/// let preset = Preset::parse_line("Golden Wolf\t110\t3\t5\t4\t6", 1).unwrap();
/// assert_eq!(preset.name, "Golden Wolf");
/// assert_eq!(preset.scaling_coefficient, 110);
/// assert_eq!(preset.base.attack(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    /// Display name shown to the caller.
    pub name: String,
    /// Growth-scaling coefficient, integer percentage.
    pub scaling_coefficient: i64,
    /// Visible base stats in slot order.
    pub base: BaseStats,
}

impl Preset {
    /// Parse one tab-delimited row.
    ///
    /// `line` is the 1-based line number used in error reports.
    pub fn parse_line(row: &str, line: usize) -> Result<Self, PresetError> {
        let fields: Vec<&str> = row.split('\t').collect();
        if fields.len() != 6 {
            return Err(PresetError::FieldCount {
                line,
                found: fields.len(),
            });
        }
        let name = fields[0].trim();
        if name.is_empty() {
            return Err(PresetError::EmptyName { line });
        }

        let parse = |field: &'static str, value: &str| -> Result<i64, PresetError> {
            value
                .trim()
                .parse()
                .map_err(|_| PresetError::NotAnInteger {
                    line,
                    field,
                    value: value.trim().to_string(),
                })
        };

        Ok(Self {
            name: name.to_string(),
            scaling_coefficient: parse("scaling_coefficient", fields[1])?,
            base: StatVector::new(
                parse("hp", fields[2])?,
                parse("attack", fields[3])?,
                parse("defense", fields[4])?,
                parse("speed", fields[5])?,
            ),
        })
    }

    /// The inference query for this preset.
    pub fn query(&self) -> Query {
        Query::new(self.base, self.scaling_coefficient)
    }
}

/// Parse a whole preset document.
///
/// Blank lines and lines starting with `#` are skipped; the first malformed
/// row aborts the load with its line number.
///
/// # Examples
///
/// ```rust
/// use petbase::preset::parse_presets;
///
/// let doc = "# pets\nGolden Wolf\t110\t3\t5\t4\t6\nCave Bear\t95\t6\t4\t5\t2\n";
/// let presets = parse_presets(doc).unwrap();
/// assert_eq!(presets.len(), 2);
/// assert_eq!(presets[1].name, "Cave Bear");
/// ```
pub fn parse_presets(document: &str) -> Result<Vec<Preset>, PresetError> {
    let mut presets = Vec::new();
    for (number, row) in document.lines().enumerate() {
        let trimmed = row.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        presets.push(Preset::parse_line(row, number + 1)?);
    }
    Ok(presets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_row() {
        let preset = Preset::parse_line("Forest Boar\t95\t6\t4\t5\t2", 3).unwrap();
        assert_eq!(preset.name, "Forest Boar");
        assert_eq!(preset.base, StatVector::new(6, 4, 5, 2));
        assert_eq!(preset.query().scaling_coefficient, 95);
    }

    #[test]
    fn test_wrong_field_count() {
        let err = Preset::parse_line("Forest Boar\t95\t6", 2).unwrap_err();
        assert_eq!(err, PresetError::FieldCount { line: 2, found: 3 });
    }

    #[test]
    fn test_non_numeric_field() {
        let err = Preset::parse_line("Forest Boar\t95\tsix\t4\t5\t2", 7).unwrap_err();
        assert!(matches!(
            err,
            PresetError::NotAnInteger { line: 7, field: "hp", .. }
        ));
    }

    #[test]
    fn test_empty_name() {
        let err = Preset::parse_line("  \t95\t6\t4\t5\t2", 1).unwrap_err();
        assert_eq!(err, PresetError::EmptyName { line: 1 });
    }

    #[test]
    fn test_document_skips_comments_and_blanks() {
        let doc = "\n# header\nA\t100\t1\t1\t1\t1\n\nB\t100\t2\t2\t2\t2\n";
        let presets = parse_presets(doc).unwrap();
        assert_eq!(presets.len(), 2);
        assert_eq!(presets[0].name, "A");
    }

    #[test]
    fn test_document_reports_first_bad_line() {
        let doc = "A\t100\t1\t1\t1\t1\nB\t100\t1\t1\t1\n";
        let err = parse_presets(doc).unwrap_err();
        assert_eq!(err, PresetError::FieldCount { line: 2, found: 5 });
    }
}
