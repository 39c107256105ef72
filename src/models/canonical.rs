use std::fmt;

use serde::Serialize;

use super::CellValue;

/// Final time-of-day bucket for an incident
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Night,
    #[serde(rename = "unknown")]
    Unknown,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Night => "Night",
            TimeOfDay::Unknown => "unknown",
        }
    }

    /// Parse an already-canonical label (exact match)
    pub fn from_label(label: &str) -> Option<TimeOfDay> {
        match label {
            "Morning" => Some(TimeOfDay::Morning),
            "Afternoon" => Some(TimeOfDay::Afternoon),
            "Night" => Some(TimeOfDay::Night),
            "unknown" => Some(TimeOfDay::Unknown),
            _ => None,
        }
    }

    /// Bucket for a 24h clock hour
    pub fn from_hour(hour: u32) -> TimeOfDay {
        match hour {
            6..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Night,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TimeOfDay> for CellValue {
    fn from(value: TimeOfDay) -> Self {
        CellValue::text(value.as_str())
    }
}

/// Marker written when a lookup table declares a value meaningless
pub const UNDEFINED: &str = "undefined";

/// Marker for an unknown incident type
pub const UNKNOWN_TYPE: &str = "Unknown";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hour() {
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(6), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(93), TimeOfDay::Night);
    }

    #[test]
    fn test_label_round_trip() {
        for t in [
            TimeOfDay::Morning,
            TimeOfDay::Afternoon,
            TimeOfDay::Night,
            TimeOfDay::Unknown,
        ] {
            assert_eq!(TimeOfDay::from_label(t.as_str()), Some(t));
        }
    }
}
