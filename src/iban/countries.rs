//! Per-country IBAN lengths and patterns.
//!
//! Each country carries an anchored regular expression over the whole
//! whitespace-free IBAN: country code, two check digits, then the BBAN
//! groups of the IBAN registry (`\d` digits, `[A-Z]` upper-case letters,
//! `[A-Z0-9]` upper-case alphanumerics).

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Registered IBAN format of one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IbanFormat {
    /// ISO 3166-1 alpha-2 country code.
    pub country: &'static str,
    /// Total IBAN length including country code and check digits.
    pub length: usize,
    /// Anchored pattern for the whole IBAN.
    pub pattern: &'static str,
}

/// Look up the registered format of a country (case-sensitive, upper case).
pub fn iban_format(country: &str) -> Option<&'static IbanFormat> {
    IBAN_FORMATS
        .binary_search_by(|f| f.country.cmp(country))
        .ok()
        .map(|i| &IBAN_FORMATS[i])
}

/// Expected total IBAN length for a country.
pub fn iban_length(country: &str) -> Option<usize> {
    iban_format(country).map(|f| f.length)
}

/// Check whether IBANs are registered for `country`.
pub fn is_known_iban_country(country: &str) -> bool {
    iban_format(country).is_some()
}

lazy_static! {
    /// Compiled patterns of the registered countries, keyed by pattern text.
    static ref IBAN_PATTERNS: HashMap<&'static str, Regex> = IBAN_FORMATS
        .iter()
        .filter_map(|f| match compile(f.pattern) {
            Ok(re) => Some((f.pattern, re)),
            Err(e) => {
                warn!(country = f.country, error = %e, "IBAN pattern does not compile");
                None
            }
        })
        .collect();
}

impl IbanFormat {
    /// Whether a whitespace-free IBAN matches this country's pattern.
    ///
    /// Registered patterns are compiled once; a pattern that does not
    /// compile never matches.
    pub fn matches(&self, iban: &str) -> bool {
        match IBAN_PATTERNS.get(self.pattern) {
            Some(re) => re.is_match(iban),
            None => compile(self.pattern).is_ok_and(|re| re.is_match(iban)),
        }
    }
}

/// Compile with Unicode off so `\d` only matches ASCII digits.
fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).unicode(false).build()
}

macro_rules! formats {
    ($(($country:literal, $length:literal, $pattern:literal)),* $(,)?) => {
        &[$(IbanFormat { country: $country, length: $length, pattern: $pattern }),*]
    };
}

/// Registered IBAN formats (65 countries). Sorted by country for binary search.
static IBAN_FORMATS: &[IbanFormat] = formats![
    ("AD", 24, r"^AD\d{2}\d{4}\d{4}[A-Z0-9]{12}$"),
    ("AE", 23, r"^AE\d{2}\d{3}\d{16}$"),
    ("AL", 28, r"^AL\d{2}\d{8}[A-Z0-9]{16}$"),
    ("AT", 20, r"^AT\d{2}\d{5}\d{11}$"),
    ("AZ", 28, r"^AZ\d{2}[A-Z]{4}[A-Z0-9]{20}$"),
    ("BA", 20, r"^BA\d{2}\d{3}\d{3}\d{8}\d{2}$"),
    ("BE", 16, r"^BE\d{2}\d{3}\d{7}\d{2}$"),
    ("BG", 22, r"^BG\d{2}[A-Z]{4}\d{4}\d{2}[A-Z0-9]{8}$"),
    ("BH", 22, r"^BH\d{2}[A-Z]{4}[A-Z0-9]{14}$"),
    ("BR", 29, r"^BR\d{2}\d{8}\d{5}\d{10}[A-Z]{1}[A-Z0-9]{1}$"),
    ("CH", 21, r"^CH\d{2}\d{5}[A-Z0-9]{12}$"),
    ("CR", 21, r"^CR\d{2}\d{3}\d{14}$"),
    ("CY", 28, r"^CY\d{2}\d{3}\d{5}[A-Z0-9]{16}$"),
    ("CZ", 24, r"^CZ\d{2}\d{4}\d{6}\d{10}$"),
    ("DE", 22, r"^DE\d{2}\d{8}\d{10}$"),
    ("DK", 18, r"^DK\d{2}\d{4}\d{9}\d{1}$"),
    ("DO", 28, r"^DO\d{2}[A-Z0-9]{4}\d{20}$"),
    ("EE", 20, r"^EE\d{2}\d{2}\d{2}\d{11}\d{1}$"),
    ("ES", 24, r"^ES\d{2}\d{4}\d{4}\d{1}\d{1}\d{10}$"),
    ("FI", 18, r"^FI\d{2}\d{6}\d{7}\d{1}$"),
    ("FO", 18, r"^FO\d{2}\d{4}\d{9}\d{1}$"),
    ("FR", 27, r"^FR\d{2}\d{5}\d{5}[A-Z0-9]{11}\d{2}$"),
    ("GB", 22, r"^GB\d{2}[A-Z]{4}\d{6}\d{8}$"),
    ("GE", 22, r"^GE\d{2}[A-Z]{2}\d{16}$"),
    ("GI", 23, r"^GI\d{2}[A-Z]{4}[A-Z0-9]{15}$"),
    ("GL", 18, r"^GL\d{2}\d{4}\d{9}\d{1}$"),
    ("GR", 27, r"^GR\d{2}\d{3}\d{4}[A-Z0-9]{16}$"),
    ("GT", 28, r"^GT\d{2}[A-Z0-9]{4}[A-Z0-9]{20}$"),
    ("HR", 21, r"^HR\d{2}\d{7}\d{10}$"),
    ("HU", 28, r"^HU\d{2}\d{3}\d{4}\d{1}\d{15}\d{1}$"),
    ("IE", 22, r"^IE\d{2}[A-Z]{4}\d{6}\d{8}$"),
    ("IL", 23, r"^IL\d{2}\d{3}\d{3}\d{13}$"),
    ("IS", 26, r"^IS\d{2}\d{4}\d{2}\d{6}\d{10}$"),
    ("IT", 27, r"^IT\d{2}[A-Z]{1}\d{5}\d{5}[A-Z0-9]{12}$"),
    ("KW", 30, r"^KW\d{2}[A-Z]{4}[A-Z0-9]{22}$"),
    ("KZ", 20, r"^KZ\d{2}\d{3}[A-Z0-9]{13}$"),
    ("LB", 28, r"^LB\d{2}\d{4}[A-Z0-9]{20}$"),
    ("LI", 21, r"^LI\d{2}\d{5}[A-Z0-9]{12}$"),
    ("LT", 20, r"^LT\d{2}\d{5}\d{11}$"),
    ("LU", 20, r"^LU\d{2}\d{3}[A-Z0-9]{13}$"),
    ("LV", 21, r"^LV\d{2}[A-Z]{4}[A-Z0-9]{13}$"),
    ("MC", 27, r"^MC\d{2}\d{5}\d{5}[A-Z0-9]{11}\d{2}$"),
    ("MD", 24, r"^MD\d{2}[A-Z0-9]{20}$"),
    ("ME", 22, r"^ME\d{2}\d{3}\d{13}\d{2}$"),
    ("MK", 19, r"^MK\d{2}\d{3}[A-Z0-9]{10}\d{2}$"),
    ("MR", 27, r"^MR\d{2}\d{5}\d{5}\d{11}\d{2}$"),
    ("MT", 31, r"^MT\d{2}[A-Z]{4}\d{5}[A-Z0-9]{18}$"),
    ("MU", 30, r"^MU\d{2}[A-Z]{4}\d{2}\d{2}\d{12}\d{3}[A-Z]{3}$"),
    ("NL", 18, r"^NL\d{2}[A-Z]{4}\d{10}$"),
    ("NO", 15, r"^NO\d{2}\d{4}\d{6}\d{1}$"),
    ("PK", 24, r"^PK\d{2}[A-Z]{4}[A-Z0-9]{16}$"),
    ("PL", 28, r"^PL\d{2}\d{8}\d{16}$"),
    ("PS", 29, r"^PS\d{2}[A-Z]{4}[A-Z0-9]{21}$"),
    ("PT", 25, r"^PT\d{2}\d{4}\d{4}\d{11}\d{2}$"),
    ("QA", 29, r"^QA\d{2}[A-Z]{4}[A-Z0-9]{21}$"),
    ("RO", 24, r"^RO\d{2}[A-Z]{4}[A-Z0-9]{16}$"),
    ("RS", 22, r"^RS\d{2}\d{3}\d{13}\d{2}$"),
    ("SA", 24, r"^SA\d{2}\d{2}[A-Z0-9]{18}$"),
    ("SE", 24, r"^SE\d{2}\d{3}\d{16}\d{1}$"),
    ("SI", 19, r"^SI\d{2}\d{5}\d{8}\d{2}$"),
    ("SK", 24, r"^SK\d{2}\d{4}\d{6}\d{10}$"),
    ("SM", 27, r"^SM\d{2}[A-Z]{1}\d{5}\d{5}[A-Z0-9]{12}$"),
    ("TN", 24, r"^TN\d{2}\d{2}\d{3}\d{13}\d{2}$"),
    ("TR", 26, r"^TR\d{2}\d{5}[A-Z0-9]{1}[A-Z0-9]{16}$"),
    ("VG", 24, r"^VG\d{2}[A-Z]{4}\d{16}$"),
];
