use crate::models::TimeOfDay;

/// Keyword list for one time-of-day bucket
#[derive(Debug)]
pub struct TimeKeywords {
    pub bucket: TimeOfDay,
    /// Matched as substrings of the lower-cased value
    pub phrases: &'static [&'static str],
    /// Matched verbatim against the raw value
    pub literals: &'static [&'static str],
}

impl TimeKeywords {
    /// Whether any keyword occurs in the value (`lowered` is `raw` in lower case)
    pub fn matches(&self, raw: &str, lowered: &str) -> bool {
        self.phrases.iter().any(|p| lowered.contains(p))
            || self.literals.iter().any(|l| raw.contains(l))
    }
}

/// Phrases that mean the time was never recorded
pub const NOT_RECORDED: &[&str] = &["not", "?"];

/// Buckets in the order they are tried; the first match wins
pub const TIME_KEYWORDS: &[TimeKeywords] = &[
    TimeKeywords {
        bucket: TimeOfDay::Morning,
        phrases: &[
            "early morning",
            "morning",
            "just before noon",
            "am",
            "a.m.",
            "late morning",
            "noon",
            "mid morning",
            "mid-morning",
        ],
        literals: &[
            "Sometime between 06h00 & 08hoo",
            "Between 11h00 & 12h00",
            "Before 10h30",
        ],
    },
    TimeKeywords {
        bucket: TimeOfDay::Afternoon,
        phrases: &[
            "afternoon",
            "\"midday\"",
            "early afternoon",
            "after noon",
            "mid afternoon",
            "daytime",
            "\"after lunch\"",
            "midday",
            "before daybreak",
        ],
        literals: &[">17h30", "17h00 Sunset", "Shortly before 13h00"],
    },
    TimeKeywords {
        bucket: TimeOfDay::Night,
        phrases: &[
            "night",
            "\"evening\"",
            "late afternoon",
            "sunset",
            "midnight",
            "lunchtime",
            "just before sundown",
            "shortly after midnight",
            "after dusk",
            "dusk",
            "\"night\"",
            "nightfall",
            "just before dawn",
            "dark",
            "\"shortly before dusk\"",
            "after midnight",
            "\"early evening\"",
        ],
        literals: &[
            "After 04h00",
            "Ship aban-doned at 03h10",
            "30 minutes after 1992.07.08.a",
        ],
    },
];
