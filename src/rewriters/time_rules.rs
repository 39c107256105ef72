use once_cell::sync::Lazy;
use regex::Regex;

use super::{Rewrite, RewriteChain, RewriteRule};

/// Reduce a lower-cased time note to digits and `h` separators
pub static TIME_RULES: Lazy<RewriteChain> = Lazy::new(|| {
    RewriteChain::new(vec![
        RewriteRule::new("hour_suffix", "hr", Rewrite::Template("h")),
        RewriteRule::new("hoo_typo", "hoo", Rewrite::Template("h")),
        RewriteRule::new("jh_typo", "jh", Rewrite::Template("h")),
        RewriteRule::new("digits_and_h_only", "[^0-9h]", Rewrite::Template("")),
        RewriteRule::new("collapse_h", "h+", Rewrite::Template("h")),
        RewriteRule::new("leading_h", "^h", Rewrite::Template("")),
    ])
});

/// `16h15`, `16h`
pub static CLOCK_WITH_H: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,2})h([0-9]{1,2})?").unwrap());

/// `1615`, `930`, `7`
pub static CLOCK_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]{1,4})").unwrap());

/// Canonical `HH:MM`
pub static CLOCK_CANONICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+):([0-9]+)$").unwrap());
