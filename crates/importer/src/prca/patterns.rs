//! Text patterns used on PRCA result pages.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::category::Category;

/// "July 19-28, 2024", "Jun 29-Jul 4, 2024", "Sep. 11, 2024"
static DATE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*([A-Za-z]+)\.?\s+(\d{1,2})(?:\s*-\s*(?:([A-Za-z]+)\.?\s+)?(\d{1,2}))?,\s*(\d{4})\s*$",
    )
    .expect("date range pattern")
});

/// "First round", "2nd Performance", "third go-round"
static ROUND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth|\d+(?:st|nd|rd|th))\s+(?:round|go-round|go|performance)\b",
    )
    .expect("round pattern")
});

/// "87.5 points", "7.4 seconds", "7.4 sec", "8.1"
static SCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)\s*(points?|pts|seconds?|secs?)?\s*$")
        .expect("score pattern")
});

const NO_SCORE: &[&str] = &["nt", "no time", "ns", "no score", "dq", "-"];

const ORDINAL_WORDS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth",
];

/// Parse a published date range into its first and last day.
pub fn parse_date_range(text: &str) -> Option<(NaiveDate, NaiveDate)> {
    let caps = DATE_RANGE.captures(text)?;
    let start_month = caps.get(1)?.as_str();
    let start_day: u32 = caps.get(2)?.as_str().parse().ok()?;
    let end_month = caps.get(3).map_or(start_month, |m| m.as_str());
    let end_day: u32 = caps.get(4).map_or(Some(start_day), |d| d.as_str().parse().ok())?;
    let year: i32 = caps.get(5)?.as_str().parse().ok()?;

    let start = month_day(start_month, start_day, year)?;
    let end = month_day(end_month, end_day, year)?;

    (end >= start).then_some((start, end))
}

fn month_day(month: &str, day: u32, year: i32) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{month} {day} {year}"), "%B %d %Y").ok()
}

/// Round number from a round label; `None` for labels without one (finals,
/// short go, missing).
pub fn parse_round(label: &str) -> Option<i64> {
    let caps = ROUND.captures(label)?;
    let ordinal = caps.get(1)?.as_str().to_ascii_lowercase();

    if let Some(idx) = ORDINAL_WORDS.iter().position(|w| *w == ordinal) {
        return Some(idx as i64 + 1);
    }

    let digits = ordinal.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    digits.parse().ok().filter(|n| *n > 0)
}

/// Numeric score for a result in `category`.
///
/// Returns `Ok(None)` for no-time / no-score marks and an error when the text
/// is not a score or its unit contradicts the category.
pub fn parse_score(text: &str, category: Category) -> Result<Option<f64>, String> {
    let trimmed = text.trim();
    if NO_SCORE.contains(&trimmed.to_ascii_lowercase().as_str()) {
        return Ok(None);
    }

    let caps = SCORE
        .captures(trimmed)
        .ok_or_else(|| format!("Unrecognised score: '{}'", trimmed))?;
    let value: f64 = caps[1]
        .parse()
        .map_err(|_| format!("Unrecognised score: '{}'", trimmed))?;

    if let Some(unit) = caps.get(2) {
        let is_time = unit.as_str().to_ascii_lowercase().starts_with("sec");
        if is_time != category.is_timed() {
            return Err(format!(
                "Score '{}' does not match {} scoring",
                trimmed, category
            ));
        }
    }

    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_date_range_same_month() {
        assert_eq!(
            parse_date_range("July 19-28, 2024"),
            Some((date("2024-07-19"), date("2024-07-28")))
        );
    }

    #[test]
    fn test_date_range_across_months() {
        assert_eq!(
            parse_date_range("Jun 29-Jul 4, 2024"),
            Some((date("2024-06-29"), date("2024-07-04")))
        );
    }

    #[test]
    fn test_single_day() {
        assert_eq!(
            parse_date_range("Sep 11, 2024"),
            Some((date("2024-09-11"), date("2024-09-11")))
        );
    }

    #[test]
    fn test_date_range_rejects_backwards_and_garbage() {
        assert_eq!(parse_date_range("July 28-19, 2024"), None);
        assert_eq!(parse_date_range("sometime in July"), None);
        assert_eq!(parse_date_range("February 30, 2024"), None);
    }

    #[test]
    fn test_rounds() {
        assert_eq!(parse_round("First round"), Some(1));
        assert_eq!(parse_round("Second Round"), Some(2));
        assert_eq!(parse_round("2nd Performance"), Some(2));
        assert_eq!(parse_round("11th go-round"), Some(11));
        assert_eq!(parse_round("Finals"), None);
        assert_eq!(parse_round(""), None);
    }

    #[test]
    fn test_scores() {
        assert_eq!(parse_score("87.5 points", Category::BullRiding), Ok(Some(87.5)));
        assert_eq!(parse_score("7.4 seconds", Category::TieDownRoping), Ok(Some(7.4)));
        assert_eq!(parse_score("17.32 sec", Category::BarrelRacing), Ok(Some(17.32)));
        assert_eq!(parse_score("8.1", Category::SteerWrestling), Ok(Some(8.1)));
        assert_eq!(parse_score("NT", Category::TeamRoping), Ok(None));
        assert_eq!(parse_score("no score", Category::BarebackRiding), Ok(None));
    }

    #[test]
    fn test_score_unit_must_match_category() {
        assert!(parse_score("7.4 seconds", Category::BullRiding).is_err());
        assert!(parse_score("88 points", Category::BarrelRacing).is_err());
        assert!(parse_score("fast", Category::BarrelRacing).is_err());
    }
}
