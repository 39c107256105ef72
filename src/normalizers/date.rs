use crate::models::CellValue;
use crate::rewriters::DATE_RULES;

/// Layout applied to date-typed cells before they go through the text rules
const DATE_TEXT_FORMAT: &str = "%d %b %Y";

/// Normalize an incident date.
///
/// Date-typed cells are rendered as `DD Mon YYYY` and then handled as text.
/// Text runs through the ordered [`DATE_RULES`]; whatever the rules cannot
/// resolve is returned as they left it. Numbers pass through unchanged, and
/// null or text reduced to nothing yields null.
pub fn normalize_date(value: &CellValue) -> CellValue {
    let text = match value {
        CellValue::Null => return CellValue::Null,
        CellValue::Number(_) => return value.clone(),
        CellValue::Timestamp(ts) => ts.format(DATE_TEXT_FORMAT).to_string(),
        CellValue::Text(s) => s.clone(),
    };

    let normalized = clean_date_text(&text);
    if normalized.is_empty() {
        CellValue::Null
    } else {
        CellValue::Text(normalized)
    }
}

/// Run the date rewrite chain over free text
pub fn clean_date_text(text: &str) -> String {
    DATE_RULES.run(text.trim())
}
