use chrono::{DateTime, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

use crate::shared::constants::TWO_DIGIT_YEAR_PIVOT;

lazy_static! {
    /// Two-letter US state / territory code, any case
    /// - Valid: "CA", "tx", "Ny"
    /// - Invalid: "C", "CAL", "C1", ""
    pub static ref STATE_CODE_REGEX: Regex = Regex::new(r"^[A-Za-z]{2}$").unwrap();

    /// US-style numeric date: M/D/YYYY, MM-DD-YY and friends
    static ref US_DATE_REGEX: Regex =
        Regex::new(r"^([0-9]{1,2})[/\-]([0-9]{1,2})[/\-]([0-9]{2,4})$").unwrap();
}

/// Validate a state code and normalize it to upper case
pub fn normalize_state_code(code: &str) -> Option<String> {
    let code = code.trim();
    STATE_CODE_REGEX
        .is_match(code)
        .then(|| code.to_ascii_uppercase())
}

/// Parse a `M/D/YYYY`-style date. Two-digit years are pivoted around
/// [`TWO_DIGIT_YEAR_PIVOT`]; impossible calendar dates return `None`.
pub fn parse_us_date(input: &str) -> Option<NaiveDate> {
    let caps = US_DATE_REGEX.captures(input.trim())?;
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let year_digits = &caps[3];
    let mut year: i32 = year_digits.parse().ok()?;

    match year_digits.len() {
        2 if year < TWO_DIGIT_YEAR_PIVOT => year += 2000,
        2 => year += 1900,
        3 => return None,
        _ => {}
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse the loosely formatted dates clients send for `dateOccurred`:
/// `YYYY-MM-DD`, a full RFC 3339 timestamp, or a US `M/D/YYYY` date.
pub fn parse_loose_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.date_naive());
    }

    parse_us_date(input)
}
