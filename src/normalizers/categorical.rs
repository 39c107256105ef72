use crate::dictionaries::{lookup, SEX_TOKENS, TYPE_TOKENS};
use crate::models::{CellValue, UNKNOWN_TYPE};

/// Normalize the victim's sex. Known stray variants collapse to `M` or
/// `undefined`; every other value passes through unchanged.
pub fn normalize_sex(value: &CellValue) -> CellValue {
    match value.as_str().and_then(|raw| lookup(SEX_TOKENS, raw)) {
        Some(canonical) => CellValue::text(canonical),
        None => value.clone(),
    }
}

/// Normalize the incident type (Unprovoked, Provoked, ...).
///
/// Values are trimmed; placeholders become `Unknown` and doubtful types
/// become `Unconfirmed`. Null stays null.
pub fn normalize_type(value: &CellValue) -> CellValue {
    let Some(raw) = value.to_text() else {
        return CellValue::Null;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::text(UNKNOWN_TYPE);
    }
    CellValue::text(lookup(TYPE_TOKENS, trimmed).unwrap_or(trimmed))
}
