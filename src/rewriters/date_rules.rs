use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Captures;

use super::{capture_number, Rewrite, RewriteChain, RewriteRule};

/// Words that qualify a date without carrying one. Longer phrases come
/// first so "Before the war" is removed whole rather than leaving "the war".
const QUALIFIERS: &str = r"(?i)Anniversary Day|No date|During the war|Before the war|Said to be|World War II|a few years before|Reported|Circa|Ca\.|Ca|Early|Late|Between|Before|After";

/// Ordered date rewrite rules.
///
/// The anchored `Before`/`Between` forms run ahead of qualifier stripping,
/// otherwise the qualifier step would consume the word they key on.
pub static DATE_RULES: Lazy<RewriteChain> = Lazy::new(|| {
    RewriteChain::new(vec![
        RewriteRule::new(
            "before_year",
            r"(?i)\bBefore (\d{4})\b",
            Rewrite::With(year_before),
        ),
        RewriteRule::new(
            "before_day",
            r"(?i)\bBefore (\d{2})-(\w+)-(\d{4})",
            Rewrite::With(day_before),
        ),
        RewriteRule::new(
            "between_years",
            r"(?i)\bBetween (\d{4}) & (\d{4})",
            Rewrite::With(midpoint_year),
        ),
        RewriteRule::new("qualifiers", QUALIFIERS, Rewrite::Template("")).trimmed(),
        RewriteRule::new("disambiguation_suffix", r"(\.\w)+$", Rewrite::Template("")).trimmed(),
        RewriteRule::new(
            "day_dash_month_dash_year",
            r"(\d{2})-(\w+)-(\d{4})",
            Rewrite::Template("${1} ${2} ${3}"),
        ),
        RewriteRule::new(
            "day_month_dash_year",
            r"(\d{2}) (\w+)-(\d{4})",
            Rewrite::Template("${1} ${2} ${3}"),
        ),
        RewriteRule::new(
            "day_dash_month_dash_short_year",
            r"(\d{2})-(\w+)-(\d{2})",
            Rewrite::Template("${1} ${2} 20${3}"),
        ),
        RewriteRule::new(
            "month_dash_day_dash_year",
            r"(\w+)-(\d{2})-(\d{4})",
            Rewrite::Template("${2} ${1} ${3}"),
        ),
        RewriteRule::new("year_range", r"(\d{4})-(\d{4})", Rewrite::With(midpoint_year)),
        RewriteRule::new(
            "alternative_years",
            r"^(\d{4}) or \d{4}$",
            Rewrite::Template("${1}"),
        ),
        RewriteRule::new("bare_year", r"^(\d{4})$", Rewrite::Template("01 Jan ${1}")),
        RewriteRule::new(
            "month_year",
            r"^(\w+) (\d{4})$",
            Rewrite::Template("01 ${1} ${2}"),
        ),
        RewriteRule::new(
            "month_dash_year",
            r"^(\w+)-(\d{4})$",
            Rewrite::Template("01 ${1} ${2}"),
        ),
        RewriteRule::new("before_christ", r"(?i)B\.C\.", Rewrite::Template("BC")),
        RewriteRule::new("anno_domini", r"(?i)A\.D\.", Rewrite::Template("AD")),
        RewriteRule::new("circa", r"Circa|circa", Rewrite::Template("")).trimmed(),
    ])
});

/// `Before YYYY` → first day of the previous year
fn year_before(caps: &Captures) -> String {
    match capture_number(caps, 1) {
        Some(year) => format!("01 Jan {}", year - 1),
        None => caps[0].to_string(),
    }
}

/// `Before DD-Mon-YYYY` → the day before
fn day_before(caps: &Captures) -> String {
    let (day, month, year) = (&caps[1], &caps[2], &caps[3]);
    let parsed = NaiveDate::parse_from_str(&format!("{}-{}-{}", day, month, year), "%d-%b-%Y")
        .ok()
        .and_then(|d| d.pred_opt());
    if let Some(previous) = parsed {
        return previous.format("%d %b %Y").to_string();
    }
    match capture_number(caps, 1) {
        Some(day) => format!("{:02} {} {}", (day - 1).max(1), month, year),
        None => caps[0].to_string(),
    }
}

/// `Y1-Y2` (or `Between Y1 & Y2`) → first day of the midpoint year, floor division
fn midpoint_year(caps: &Captures) -> String {
    match (capture_number(caps, 1), capture_number(caps, 2)) {
        (Some(start), Some(end)) => format!("01 Jan {}", (start + end).div_euclid(2)),
        _ => caps[0].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> &'static RewriteRule {
        DATE_RULES.rule(name).unwrap()
    }

    #[test]
    fn test_before_year() {
        assert_eq!(rule("before_year").rewrite("Before 1900"), "01 Jan 1899");
    }

    #[test]
    fn test_before_day() {
        assert_eq!(rule("before_day").rewrite("Before 12-Mar-1900"), "11 Mar 1900");
        assert_eq!(rule("before_day").rewrite("Before 01-Mar-1900"), "28 Feb 1900");
    }

    #[test]
    fn test_between_years() {
        assert_eq!(
            rule("between_years").rewrite("Between 1900 & 1905"),
            "01 Jan 1902"
        );
    }

    #[test]
    fn test_qualifiers() {
        assert_eq!(rule("qualifiers").rewrite("Reported 09-Sep-2023"), "09-Sep-2023");
        assert_eq!(rule("qualifiers").rewrite("Ca. 1855"), "1855");
        assert_eq!(rule("qualifiers").rewrite("Circa 1855"), "1855");
        assert_eq!(rule("qualifiers").rewrite("Before the war"), "");
        assert_eq!(rule("qualifiers").rewrite("No date"), "");
    }

    #[test]
    fn test_disambiguation_suffix() {
        assert_eq!(
            rule("disambiguation_suffix").rewrite("1992.07.08.a"),
            "1992.07.08"
        );
        assert_eq!(
            rule("disambiguation_suffix").rewrite("1992.07.08.a.b"),
            "1992.07.08"
        );
        assert_eq!(
            rule("disambiguation_suffix").rewrite("1992.07.08"),
            "1992.07.08"
        );
    }

    #[test]
    fn test_structural_forms() {
        assert_eq!(
            rule("day_dash_month_dash_year").rewrite("09-Sep-2023"),
            "09 Sep 2023"
        );
        assert_eq!(rule("day_month_dash_year").rewrite("09 Sep-2023"), "09 Sep 2023");
        assert_eq!(
            rule("day_dash_month_dash_short_year").rewrite("09-Sep-23"),
            "09 Sep 2023"
        );
        assert_eq!(
            rule("month_dash_day_dash_year").rewrite("Aug-24-1806"),
            "24 Aug 1806"
        );
    }

    #[test]
    fn test_year_range() {
        assert_eq!(rule("year_range").rewrite("1900-1905"), "01 Jan 1902");
    }

    #[test]
    fn test_partial_dates() {
        assert_eq!(rule("alternative_years").rewrite("1990 or 1991"), "1990");
        assert_eq!(rule("bare_year").rewrite("1900"), "01 Jan 1900");
        assert_eq!(rule("month_year").rewrite("October 1815"), "01 October 1815");
        assert_eq!(rule("month_dash_year").rewrite("Sep-1805"), "01 Sep 1805");
    }

    #[test]
    fn test_eras() {
        assert_eq!(rule("before_christ").rewrite("214 B.C."), "214 BC");
        assert_eq!(rule("anno_domini").rewrite("77 a.d."), "77 AD");
    }

    #[test]
    fn test_circa() {
        assert_eq!(rule("circa").rewrite("circa 1855"), "1855");
    }

    #[test]
    fn test_rule_order() {
        let names = DATE_RULES.names();
        let position = |n: &str| names.iter().position(|x| *x == n).unwrap();
        assert!(position("before_year") < position("qualifiers"));
        assert!(position("alternative_years") < position("bare_year"));
        assert_eq!(names.len(), 17);
    }
}
