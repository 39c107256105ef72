use once_cell::sync::Lazy;
use regex::Regex;

use crate::dictionaries::ACTIVITY_TERMS;
use crate::models::CellValue;

/// Characters outside word chars, whitespace, commas and periods
static PLACE_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s,\.]").unwrap());

/// Characters outside word chars, whitespace and commas
static INJURY_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s,]").unwrap());

/// Canonical display form of a place or activity: noise characters removed,
/// trimmed and title-cased. Noise is removed before casing so the result is
/// stable when cleaned again.
pub fn canonical_text(raw: &str) -> String {
    let stripped = PLACE_NOISE.replace_all(raw.trim(), "");
    title_case(stripped.trim())
}

/// Lookup form of an already-canonical value
pub fn lookup_key(canonical: &str) -> String {
    canonical.trim().to_lowercase()
}

/// Normalize Country, State or Location cells
pub fn normalize_place(value: &CellValue) -> CellValue {
    match value.to_text() {
        None => CellValue::Null,
        Some(raw) => non_empty(canonical_text(&raw)),
    }
}

/// Normalize the activity the victim was engaged in
pub fn normalize_activity(value: &CellValue) -> CellValue {
    let Some(raw) = value.to_text() else {
        return CellValue::Null;
    };
    let mut activity = canonical_text(&raw);
    for &(from, to) in ACTIVITY_TERMS {
        if activity.contains(from) {
            activity = activity.replace(from, to);
        }
    }
    non_empty(activity)
}

/// Normalize the injury description: sentence case with punctuation other
/// than commas removed. Periods go with the rest of the punctuation, so a
/// multi-sentence note is kept whole (`"FATAL. Body not recovered"` →
/// `"Fatal body not recovered"`).
pub fn normalize_injury(value: &CellValue) -> CellValue {
    let Some(raw) = value.to_text() else {
        return CellValue::Null;
    };
    let sentence = sentence_case(raw.trim());
    let cleaned = INJURY_NOISE.replace_all(&sentence, "");
    non_empty(cleaned.trim().to_string())
}

fn non_empty(text: String) -> CellValue {
    if text.is_empty() {
        CellValue::Null
    } else {
        CellValue::Text(text)
    }
}

/// Upper-case the first letter of every run of cased characters and
/// lower-case the rest (`"o'neil 3rd"` → `"O'Neil 3Rd"`)
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;
    for c in text.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased && !previous_cased {
            out.extend(c.to_uppercase());
        } else if cased {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        previous_cased = cased;
    }
    out
}

/// First character upper case, the rest lower case
pub fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("south africa"), "South Africa");
        assert_eq!(title_case("USA"), "Usa");
        assert_eq!(title_case("st. helena"), "St. Helena");
        assert_eq!(title_case("3rd beach"), "3Rd Beach");
    }

    #[test]
    fn test_place() {
        let place = |raw: &str| normalize_place(&CellValue::text(raw));
        assert_eq!(place("  SOUTH AFRICA "), CellValue::text("South Africa"));
        assert_eq!(place("Fiji?"), CellValue::text("Fiji"));
        assert_eq!(
            place("Cape Town, Western Cape Province."),
            CellValue::text("Cape Town, Western Cape Province.")
        );
        assert_eq!(place("O'Neil Beach"), CellValue::text("Oneil Beach"));
        assert_eq!(place("?"), CellValue::Null);
        assert_eq!(normalize_place(&CellValue::Null), CellValue::Null);
    }

    #[test]
    fn test_lookup_key() {
        assert_eq!(lookup_key(&canonical_text(" usa ")), "usa");
        assert_eq!(lookup_key(&canonical_text("SOUTH AFRICA")), "south africa");
    }

    #[test]
    fn test_activity() {
        let activity = |raw: &str| normalize_activity(&CellValue::text(raw));
        assert_eq!(activity("snorkelling"), CellValue::text("Snorkeling"));
        assert_eq!(activity("Boogie boarding"), CellValue::text("Bodyboarding"));
        assert_eq!(activity("free diving for abalone"), CellValue::text("Freediving For Abalone"));
        assert_eq!(
            activity("Stand-Up Paddle boarding"),
            CellValue::text("Standup Paddleboarding")
        );
        assert_eq!(activity("surfing"), CellValue::text("Surfing"));
    }

    #[test]
    fn test_injury() {
        let injury = |raw: &str| normalize_injury(&CellValue::text(raw));
        assert_eq!(
            injury("FATAL. Body not recovered"),
            CellValue::text("Fatal body not recovered")
        );
        assert_eq!(
            injury("Laceration to thigh. PROVOKED INCIDENT"),
            CellValue::text("Laceration to thigh provoked incident")
        );
        assert_eq!(
            injury(" Laceration to left foot, minor "),
            CellValue::text("Laceration to left foot, minor")
        );
        assert_eq!(injury("No injury (shark bit board)"), CellValue::text("No injury shark bit board"));
        assert_eq!(injury("."), CellValue::Null);
    }

    #[test]
    fn test_idempotent() {
        for raw in ["  SOUTH AFRICA ", "O'Neil Beach", "New South Wales."] {
            let once = normalize_place(&CellValue::text(raw));
            assert_eq!(normalize_place(&once), once);
        }
        for raw in ["snorkelling", "Body boarding", "SurfSkiing"] {
            let once = normalize_activity(&CellValue::text(raw));
            assert_eq!(normalize_activity(&once), once);
        }
        for raw in ["FATAL. Body not recovered", "Leg bitten, minor"] {
            let once = normalize_injury(&CellValue::text(raw));
            assert_eq!(normalize_injury(&once), once);
        }
    }
}
