use crate::dictionaries::AGE_PHRASES;
use crate::models::CellValue;

/// Normalize a victim age to a number, or null when it cannot be read.
///
/// Vague and multi-victim phrases resolve through [`AGE_PHRASES`]; anything
/// else keeps its first whitespace-separated token, which must parse as a
/// finite number.
pub fn normalize_age(value: &CellValue) -> CellValue {
    match value {
        CellValue::Null | CellValue::Timestamp(_) => CellValue::Null,
        CellValue::Number(n) if n.is_finite() => CellValue::Number(*n),
        CellValue::Number(_) => CellValue::Null,
        CellValue::Text(raw) => parse_age(raw).into(),
    }
}

fn parse_age(raw: &str) -> Option<f64> {
    if let Some(age) = AGE_PHRASES.get(raw) {
        return Some(*age);
    }
    raw.split_whitespace()
        .next()
        .and_then(|token| token.parse::<f64>().ok())
        .filter(|n| n.is_finite())
}
