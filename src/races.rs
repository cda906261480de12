//! Static race lookup table
//!
//! Maps human-readable race/gender labels to the short internal identifiers
//! used in game asset paths. The table is read-only and insertion-ordered so
//! that generated documents come out the same way on every run.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::errors::{unknown_race_error, Result};
use crate::RaceSelection;

static RACES: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        ("Midlander M", "c0101"),
        ("Midlander F", "c0201"),
        ("Highlander M", "c0301"),
        ("Highlander F", "c0401"),
        ("Elezen M", "c0501"),
        ("Elezen F", "c0601"),
        ("Miqo'te M", "c0701"),
        ("Miqo'te F", "c0801"),
        ("Roegadyn M", "c0901"),
        ("Roegadyn F", "c1001"),
        ("Lalafell M", "c1101"),
        ("Lalafell F", "c1201"),
        ("Au Ra M", "c1301"),
        ("Au Ra F", "c1401"),
        ("Hrothgar M", "c1501"),
        ("Hrothgar F", "c1601"),
        ("Viera M", "c1701"),
        ("Viera F", "c1801"),
    ])
});

/// Gets the full race table, label to identifier, in table order
pub fn race_table() -> &'static IndexMap<&'static str, &'static str> {
    &RACES
}

/// Looks up the internal identifier for a race label
///
/// # Errors
/// Returns an error if the label is not present in the table
pub fn lookup_race(label: &str) -> Result<&'static str> {
    RACES
        .get(label)
        .copied()
        .ok_or_else(|| unknown_race_error(label))
}

/// Resolves a list of race labels into an ordered label-to-identifier selection
///
/// The selection preserves the order of the supplied labels, which in turn
/// pins the iteration order of every mapping built from it.
///
/// # Errors
/// Returns an error on the first label not present in the table
pub fn resolve_races(labels: &[String]) -> Result<RaceSelection> {
    let mut selection = RaceSelection::new();
    for label in labels {
        selection.insert(label.clone(), lookup_race(label)?.to_string());
    }
    Ok(selection)
}
