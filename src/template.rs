//! Path-template substitution
//!
//! Pure string passes over user-supplied templates. Only the two known
//! placeholders are touched; any other brace syntax passes through verbatim
//! and no validation is done on placeholder presence.

use crate::constants::{RACE_PLACEHOLDER, VARIANT_PLACEHOLDER};

/// Replaces every `{race_id}` placeholder with the given identifier
pub fn substitute_race(template: &str, race_id: &str) -> String {
    template.replace(RACE_PLACEHOLDER, race_id)
}

/// Replaces every `{variant}` placeholder with the given variant string
pub fn substitute_variant(template: &str, variant: &str) -> String {
    template.replace(VARIANT_PLACEHOLDER, variant)
}

/// Replaces both placeholders in one pass over the template
pub fn substitute(template: &str, race_id: &str, variant: &str) -> String {
    substitute_variant(&substitute_race(template, race_id), variant)
}

/// Formats a one-based variant index as a two-digit zero-padded string
pub fn format_variant(index: u32) -> String {
    format!("{index:02}")
}
