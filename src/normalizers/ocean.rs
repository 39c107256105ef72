use crate::dictionaries::ocean_for;
use crate::models::CellValue;

use super::text::{canonical_text, lookup_key};

/// Ocean or sea bordering the incident country. Accepts the raw or the
/// already-normalized Country cell; unmapped countries give null.
pub fn ocean_for_country(country: &CellValue) -> CellValue {
    country
        .to_text()
        .and_then(|raw| ocean_for(&lookup_key(&canonical_text(&raw))))
        .map(CellValue::text)
        .unwrap_or(CellValue::Null)
}
