use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// Timestamp layouts recognised when a raw text cell is really a date-typed value
/// (spreadsheet exports write timestamps this way)
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Layout used when a timestamp cell is written back out
const TIMESTAMP_OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single cell of an incident record
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    /// Absent value (empty CSV cell, JSON null, missing key)
    #[default]
    Null,
    /// Numeric value
    Number(f64),
    /// Free text
    Text(String),
    /// Date-typed value
    Timestamp(NaiveDateTime),
}

impl CellValue {
    /// Build a text cell
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Interpret a raw string cell from a flat file.
    ///
    /// Empty strings become `Null` and ISO timestamps become `Timestamp`.
    /// Everything else, numeric-looking strings included, stays text so the
    /// field normalizers decide how to read it.
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            return CellValue::Null;
        }
        for format in TIMESTAMP_FORMATS {
            if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
                return CellValue::Timestamp(ts);
            }
        }
        CellValue::Text(raw.to_string())
    }

    /// Convert a JSON value into a cell
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Null,
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) if f.is_finite() => CellValue::Number(f),
                _ => CellValue::Null,
            },
            serde_json::Value::String(s) => CellValue::from_raw(s),
            serde_json::Value::Bool(b) => CellValue::Text(b.to_string()),
            other => CellValue::Text(other.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Null or whitespace-only text
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Text view of any non-null cell; numbers render without a trailing `.0`
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            CellValue::Null => None,
            CellValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
            CellValue::Number(n) => Some(Cow::Owned(format_number(*n))),
            CellValue::Timestamp(ts) => Some(Cow::Owned(
                ts.format(TIMESTAMP_OUTPUT_FORMAT).to_string(),
            )),
        }
    }

    /// Flat-file representation; null becomes the empty string
    pub fn to_field(&self) -> String {
        self.to_text().map(Cow::into_owned).unwrap_or_default()
    }

    /// JSON representation; integral numbers are written without a fraction
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CellValue::Null => serde_json::Value::Null,
            CellValue::Number(n) if is_integral(*n) => serde_json::Value::from(*n as i64),
            CellValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            CellValue::Text(_) | CellValue::Timestamp(_) => {
                serde_json::Value::String(self.to_field())
            }
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_field())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Null => serializer.serialize_none(),
            CellValue::Number(n) if is_integral(*n) => serializer.serialize_i64(*n as i64),
            CellValue::Number(n) => serializer.serialize_f64(*n),
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Timestamp(ts) => {
                serializer.serialize_str(&ts.format(TIMESTAMP_OUTPUT_FORMAT).to_string())
            }
        }
    }
}

fn is_integral(n: f64) -> bool {
    n.fract() == 0.0 && n.abs() < i64::MAX as f64
}

fn format_number(n: f64) -> String {
    if is_integral(n) {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        assert_eq!(CellValue::from_raw(""), CellValue::Null);
        assert_eq!(CellValue::from_raw("Shark"), CellValue::text("Shark"));
        assert_eq!(CellValue::from_raw("30"), CellValue::text("30"));
        assert!(matches!(
            CellValue::from_raw("2018-06-25 00:00:00"),
            CellValue::Timestamp(_)
        ));
    }

    #[test]
    fn test_number_rendering() {
        assert_eq!(CellValue::Number(50.0).to_field(), "50");
        assert_eq!(CellValue::Number(2.5).to_field(), "2.5");
        assert_eq!(CellValue::Null.to_field(), "");
    }

    #[test]
    fn test_serialize() {
        let cells = vec![
            CellValue::Null,
            CellValue::Number(33.0),
            CellValue::Number(1.5),
            CellValue::text("Night"),
        ];
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"[null,33,1.5,"Night"]"#);
    }

    #[test]
    fn test_to_json() {
        assert_eq!(CellValue::Number(10.0).to_json(), serde_json::json!(10));
        assert_eq!(CellValue::Number(2.5).to_json(), serde_json::json!(2.5));
        assert_eq!(CellValue::text("Fiji").to_json(), serde_json::json!("Fiji"));
        assert_eq!(CellValue::Null.to_json(), serde_json::Value::Null);
    }

    #[test]
    fn test_blank() {
        assert!(CellValue::text("   ").is_blank());
        assert!(CellValue::Null.is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
    }
}
