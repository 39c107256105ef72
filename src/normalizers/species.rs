use std::borrow::Cow;

use crate::dictionaries::{is_sentinel, LOWERED_ALIASES, PHRASE_MAP, PLACEHOLDER_MAP};
use crate::models::CellValue;

/// Normalize the species note through the three-layer cascade:
///
/// 1. first alias needle found in the lowered value replaces the whole value
/// 2. exact descriptor phrases collapse to a size bucket or verdict
/// 3. leftover placeholders collapse to `NA`
///
/// Null stays null, and a value that already is a sentinel is returned as
/// is (`Unconfirmed` would otherwise hit the `unconfirmed` alias). The
/// result is either a species/bucket label or one of the sentinels that the
/// row filter removes.
pub fn normalize_species(value: &CellValue) -> CellValue {
    let Some(raw) = value.to_text() else {
        return CellValue::Null;
    };
    if !raw.trim().is_empty() && is_sentinel(&raw) {
        return CellValue::Text(raw.into_owned());
    }
    let resolved = collapse_placeholder(match_phrase(match_alias(&raw)));
    CellValue::Text(resolved.into_owned())
}

/// Layer 1: first-match-wins substring scan over the alias table
pub fn match_alias(value: &str) -> Cow<'_, str> {
    let lowered = value.to_lowercase();
    LOWERED_ALIASES
        .iter()
        .find(|(needle, _)| lowered.contains(needle.as_str()))
        .map(|(_, label)| Cow::Borrowed(*label))
        .unwrap_or(Cow::Borrowed(value))
}

/// Layer 2: exact descriptor phrase replacement
pub fn match_phrase(value: Cow<'_, str>) -> Cow<'_, str> {
    match PHRASE_MAP.get(value.as_ref()) {
        Some(bucket) => Cow::Borrowed(*bucket),
        None => value,
    }
}

/// Layer 3: placeholder collapse
pub fn collapse_placeholder(value: Cow<'_, str>) -> Cow<'_, str> {
    match PLACEHOLDER_MAP.get(value.as_ref()) {
        Some(sentinel) => Cow::Borrowed(*sentinel),
        None => value,
    }
}
