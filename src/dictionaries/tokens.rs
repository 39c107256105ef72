//! Small exact-match tables for the categorical columns.

use crate::models::{UNDEFINED, UNKNOWN_TYPE};

/// Sex cell variants → canonical token
pub const SEX_TOKENS: &[(&str, &str)] = &[
    (" M", "M"),
    ("M ", "M"),
    ("M x 2", "M"),
    ("lli", UNDEFINED),
    ("N", UNDEFINED),
    (".", UNDEFINED),
];

/// Incident type variants (matched after trimming) → canonical type
pub const TYPE_TOKENS: &[(&str, &str)] = &[
    ("?", UNKNOWN_TYPE),
    ("nan", UNKNOWN_TYPE),
    ("Questionable", "Unconfirmed"),
    ("Unverified", "Unconfirmed"),
    ("Invalid", "Unconfirmed"),
    ("Under investigation", "Unconfirmed"),
];

/// Activity spellings rewritten after title-casing, in order
pub const ACTIVITY_TERMS: &[(&str, &str)] = &[
    ("Snorkelling", "Snorkeling"),
    ("Boogie Boarding", "Bodyboarding"),
    ("Free Diving", "Freediving"),
    ("Paddle Boarding", "Paddleboarding"),
    ("Body Boarding", "Bodyboarding"),
    ("Surfskiing", "Surf Skiing"),
];

/// Bookkeeping columns with no analytical value
pub const PRUNED_COLUMNS: &[&str] = &[
    "Case Number.1",
    "Unnamed: 21",
    "Unnamed: 11",
    "Unnamed: 22",
    "Case Number",
    "href formula",
    "href",
    "pdf",
];

/// Exact lookup in a `(from, to)` table
pub fn lookup(table: &[(&str, &'static str)], value: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(from, _)| *from == value)
        .map(|(_, to)| *to)
}
