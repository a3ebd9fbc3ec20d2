//! Finnish creditor reference numbers (viitenumero).
//!
//! The last digit is a check digit over the preceding digits, weighted
//! 7, 3, 1, 7, 3, 1, … from right to left.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::normalize::strip_whitespace;
use crate::core::{PankkiError, Result, reference_checksum};

/// Shortest base (without check digit) of a Finnish reference.
const MIN_BASE_LEN: usize = 3;
/// Longest base (without check digit) of a Finnish reference.
const MAX_BASE_LEN: usize = 19;
/// Digits per block in the print form.
const PRINT_GROUP: usize = 5;

/// Validate a Finnish reference number. Whitespace is ignored.
///
/// Returns `Ok(false)` for an empty input or a wrong check digit, and
/// [`PankkiError::InvalidCharacter`] when the body contains a non-digit.
/// A body whose weighted sum ends in 0 yields the check value 10 and is
/// never valid.
///
/// ```rust
/// use pankki::is_valid_reference;
///
/// assert!(is_valid_reference("1232").unwrap());
/// assert!(!is_valid_reference("1230").unwrap());
/// assert!(is_valid_reference("12X2").is_err());
/// ```
pub fn is_valid_reference(raw: &str) -> Result<bool> {
    let reference = strip_whitespace(raw);
    let Some(last) = reference.chars().last() else {
        return Ok(false);
    };
    let body = &reference[..reference.len() - last.len_utf8()];

    let check = reference_checksum(body)?;
    let valid = last.to_string() == check.to_string();
    if !valid {
        debug!(reference = %reference, check, "reference rejected: check digit mismatch");
    }
    Ok(valid)
}

/// A Finnish creditor reference: decimal digits, check digit last.
///
/// Construction only normalizes; validity is computed by [`Self::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceNumber {
    digits: String,
}

impl ReferenceNumber {
    /// Create from raw input. Whitespace is removed; anything else but
    /// digits is rejected.
    pub fn new(raw: &str) -> Result<Self> {
        let digits = strip_whitespace(raw);
        if digits.is_empty() {
            return Err(PankkiError::InvalidInput(
                "reference number cannot be empty".into(),
            ));
        }
        ensure_digits(&digits)?;
        Ok(Self { digits })
    }

    /// Create a reference by appending the check digit to `base` (3–19 digits).
    ///
    /// Fails with [`PankkiError::InvalidFormat`] when the weighted sum of the
    /// base ends in 0, since such a base has no single check digit.
    ///
    /// ```rust
    /// use pankki::ReferenceNumber;
    ///
    /// let reference = ReferenceNumber::from_base("123").unwrap();
    /// assert_eq!(reference.as_str(), "1232");
    /// assert!(reference.is_valid());
    /// ```
    pub fn from_base(base: &str) -> Result<Self> {
        let base = strip_whitespace(base);
        ensure_digits(&base)?;
        if !(MIN_BASE_LEN..=MAX_BASE_LEN).contains(&base.len()) {
            return Err(PankkiError::InvalidFormat(format!(
                "reference base must have {MIN_BASE_LEN} to {MAX_BASE_LEN} digits, got {}",
                base.len()
            )));
        }

        let check = reference_checksum(&base)?;
        if check > 9 {
            return Err(PankkiError::InvalidFormat(format!(
                "reference base '{base}' has no valid check digit"
            )));
        }
        Ok(Self {
            digits: format!("{base}{check}"),
        })
    }

    /// The normalized digits, check digit included.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// The trailing check digit.
    pub fn check_digit(&self) -> char {
        // non-empty by construction
        self.digits.chars().last().unwrap_or('0')
    }

    /// Whether the check digit matches.
    pub fn is_valid(&self) -> bool {
        matches!(is_valid_reference(&self.digits), Ok(true))
    }

    /// Print form: leading zeros removed, then blocks of five digits
    /// counted from the right, e.g. `12 34561`.
    pub fn for_print(&self) -> String {
        let trimmed = self.digits.trim_start_matches('0');
        let head = trimmed.len() % PRINT_GROUP;

        let mut blocks: Vec<&str> = Vec::new();
        if head > 0 {
            blocks.push(&trimmed[..head]);
        }
        let mut start = head;
        while start < trimmed.len() {
            blocks.push(&trimmed[start..start + PRINT_GROUP]);
            start += PRINT_GROUP;
        }
        blocks.join(" ")
    }
}

fn ensure_digits(s: &str) -> Result<()> {
    match s.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        Some((position, character)) => Err(PankkiError::InvalidCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}

impl fmt::Display for ReferenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl FromStr for ReferenceNumber {
    type Err = PankkiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ReferenceNumber {
    type Error = PankkiError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(&s)
    }
}

impl From<ReferenceNumber> for String {
    fn from(reference: ReferenceNumber) -> Self {
        reference.digits
    }
}
