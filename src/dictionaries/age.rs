use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Representative age for vague or multi-victim age phrases.
///
/// Groups are applied in declaration order and a phrase listed in more than
/// one group takes the age of the last group that lists it ("a minor" is a
/// teen phrase and an infant phrase, and resolves to 1).
pub const AGE_GROUPS: &[(f64, &[&str])] = &[
    (
        50.0,
        &["Middle Age", "(adult)", "\"middle-age\"", "50s", "adult", "Middle age"],
    ),
    (
        25.0,
        &[
            "20/30",
            "20s",
            "28 & 22",
            "20's",
            "28 & 26",
            "28, 23 & 30",
            "21 & ?",
            "23 & 20",
            "20?",
            "mid-20s",
            "21 or 26",
            "18 to 22",
            "? & 19",
            "23 & 26",
            "25 or 28",
            "\"young\"",
            "young",
            "17 & 35",
            "18 or 20",
        ],
    ),
    (45.0, &["40s", "45 and 15", "9 & 60", "46 & 34"]),
    (
        15.0,
        &[
            "teen",
            "Teen",
            "a minor",
            "Teens",
            "?    &   14",
            "13 or 14",
            "7      &    31",
            "16 to 18",
            "13 or 18",
            "12 or 13",
        ],
    ),
    (11.0, &["Both 11"]),
    (1.0, &["a minor", "18 months", "9 months"]),
    (65.0, &["Elderly", ">50", "60's", "60s"]),
    (10.0, &["9 or 10", "10 or 12", "7 or 8", "9 & 60", "8 or 10"]),
    (
        33.0,
        &[
            "mid-30s",
            "33 & 26",
            "31 or 33",
            "36 & 23",
            "30 or 36",
            "21, 34,24 & 35",
            "Ca. 33",
            "33 & 37",
            "32 & 30",
            "37, 67, 35, 27,  ? & 27",
            "30 & 32",
            "33 or 37",
        ],
    ),
];

/// Exact phrase → age, with later groups overriding earlier ones
pub static AGE_PHRASES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (age, phrases) in AGE_GROUPS {
        for phrase in *phrases {
            map.insert(*phrase, *age);
        }
    }
    map
});
