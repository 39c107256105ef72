use crate::dictionaries::{NOT_RECORDED, TIME_KEYWORDS};
use crate::models::{CellValue, TimeOfDay};
use crate::rewriters::{CLOCK_CANONICAL, CLOCK_DIGITS, CLOCK_WITH_H, TIME_RULES};

/// Intermediate result of reading a free-text time note
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanTime {
    /// Nothing usable was recorded
    Missing,
    /// A keyword settled the bucket directly
    Bucket(TimeOfDay),
    /// A clock reading, `HH:MM`
    Clock(String),
    /// Text left after stripping, which will not categorize
    Residue(String),
}

/// Normalize an incident time to Morning / Afternoon / Night / unknown
pub fn normalize_time(value: &CellValue) -> CellValue {
    categorize_time(&clean_time_format(value)).into()
}

/// First stage: map raw text to a bucket, a clock reading or residue
pub fn clean_time_format(value: &CellValue) -> CleanTime {
    let Some(raw) = value.to_text() else {
        return CleanTime::Missing;
    };
    let raw = raw.as_ref();
    if raw.trim().is_empty() {
        return CleanTime::Missing;
    }
    if let Some(label) = TimeOfDay::from_label(raw) {
        return match label {
            TimeOfDay::Unknown => CleanTime::Missing,
            bucket => CleanTime::Bucket(bucket),
        };
    }

    let lowered = raw.to_lowercase();
    if NOT_RECORDED.iter().any(|p| lowered.contains(p)) {
        return CleanTime::Missing;
    }
    if let Some(keywords) = TIME_KEYWORDS.iter().find(|k| k.matches(raw, &lowered)) {
        return CleanTime::Bucket(keywords.bucket);
    }

    let stripped = TIME_RULES.run(&lowered);
    if let Some(caps) = CLOCK_WITH_H.captures(&stripped) {
        let hour = caps[1].parse::<u32>().unwrap_or(0);
        let minute = caps
            .get(2)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(0);
        return CleanTime::Clock(format!("{:02}:{:02}", hour, minute));
    }
    if let Some(caps) = CLOCK_DIGITS.captures(&stripped) {
        let digits = &caps[1];
        let split = digits.len().min(2);
        let hour = digits[..split].parse::<u32>().unwrap_or(0);
        let minute = digits[split..].parse::<u32>().unwrap_or(0);
        return CleanTime::Clock(format!("{:02}:{:02}", hour, minute));
    }

    if stripped.is_empty() {
        CleanTime::Missing
    } else {
        CleanTime::Residue(stripped)
    }
}

/// Second stage: reduce a cleaned time to its bucket
pub fn categorize_time(cleaned: &CleanTime) -> TimeOfDay {
    match cleaned {
        CleanTime::Missing | CleanTime::Residue(_) => TimeOfDay::Unknown,
        CleanTime::Bucket(bucket) => *bucket,
        CleanTime::Clock(clock) => CLOCK_CANONICAL
            .captures(clock)
            .and_then(|caps| caps[1].parse::<u32>().ok())
            .map(TimeOfDay::from_hour)
            .unwrap_or(TimeOfDay::Unknown),
    }
}
