use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::features::crime_types::CrimeType;
use crate::shared::constants::OCR_DESCRIPTION_MAX_CHARS;
use crate::shared::validation::parse_us_date;

lazy_static! {
    /// "Case #: AB-123", "case 2024-00017", "CASE:77"
    static ref CASE_NUMBER_REGEX: Regex =
        Regex::new(r"(?i)Case\s*#?\s*:?\s*([A-Za-z0-9_]+-?[0-9]+)").unwrap();

    /// ASCII digits only
    static ref DATE_REGEX: Regex =
        Regex::new(r"([0-9]{1,2}[/\-][0-9]{1,2}[/\-][0-9]{2,4})").unwrap();

    /// Keyword patterns in priority order; the first hit decides the crime type
    static ref CRIME_KEYWORDS: Vec<(Regex, CrimeType)> = [
        ("theft", CrimeType::Theft),
        ("steal", CrimeType::Theft),
        ("robbery", CrimeType::Theft),
        ("chase", CrimeType::PoliceChase),
        ("pursuit", CrimeType::PoliceChase),
        ("eluding", CrimeType::PoliceChase),
        ("assault.*officer", CrimeType::AttackingOfficer),
        ("attack.*officer", CrimeType::AttackingOfficer),
        ("murder", CrimeType::Murder),
        ("homicide", CrimeType::Murder),
    ]
    .into_iter()
    .map(|(pattern, crime_type)| {
        (Regex::new(&format!("(?i){}", pattern)).unwrap(), crime_type)
    })
    .collect();
}

/// Best-guess case fields pulled out of OCR text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCaseFields {
    pub case_number: Option<String>,
    pub crime_type: CrimeType,
    pub description: String,
    pub date_occurred: Option<NaiveDate>,
}

/// Derive case number, crime type, description and date from raw OCR text.
///
/// Pure and deterministic. The result only pre-fills the case form; every
/// field can be overridden before the case is submitted.
pub fn parse_extracted_text(text: &str) -> ParsedCaseFields {
    let case_number = CASE_NUMBER_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    let crime_type = CRIME_KEYWORDS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, crime_type)| *crime_type)
        .unwrap_or(CrimeType::Other);

    let description: String = text.chars().take(OCR_DESCRIPTION_MAX_CHARS).collect();

    let date_occurred = DATE_REGEX
        .find(text)
        .and_then(|m| parse_us_date(m.as_str()));

    ParsedCaseFields {
        case_number,
        crime_type,
        description,
        date_occurred,
    }
}
