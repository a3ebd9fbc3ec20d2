//! IBAN validation for every registered country.
//!
//! Validation runs three checks in order and stops at the first failure:
//!
//! 1. ISO 7064 MOD 97-10 checksum of the rearranged IBAN equals 1
//! 2. total length matches the country's registered length
//! 3. the IBAN matches the country's registered pattern (optional, see
//!    [`crate::set_structure_validation`])
//!
//! # Example
//!
//! ```rust
//! use pankki::iban::*;
//!
//! assert!(is_valid_iban("DE89 3704 0044 0532 0130 00"));
//! assert!(!is_valid_iban("DE89 3704 0044 0532 0130 01"));
//!
//! let lenient = IbanValidator::new().with_structure_check(false);
//! assert!(lenient.validate("GB29NWBK60161331926819"));
//! ```

mod account;
mod countries;

pub use account::{AccountNumber, BankAccount};
pub use countries::{IbanFormat, iban_format, iban_length, is_known_iban_country};

use tracing::debug;

use crate::core::checksum_iso7064;
use crate::core::normalize::strip_whitespace;
use crate::core::structure_validation_enabled;

/// Shortest input that can carry a country code, check digits and a body.
const MIN_IBAN_LEN: usize = 5;

/// IBAN validator with an explicit structure-check setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IbanValidator {
    structure_check: bool,
}

impl IbanValidator {
    /// Create a validator that follows the process-wide structure setting.
    pub fn new() -> Self {
        Self {
            structure_check: structure_validation_enabled(),
        }
    }

    /// Force the structure check on or off for this validator.
    pub fn with_structure_check(mut self, enabled: bool) -> Self {
        self.structure_check = enabled;
        self
    }

    /// Whether this validator matches IBANs against the country structure.
    pub fn structure_check(&self) -> bool {
        self.structure_check
    }

    /// Validate an IBAN. Whitespace is ignored. Never panics; any malformed
    /// input is reported as invalid.
    pub fn validate(&self, raw: &str) -> bool {
        let iban = strip_whitespace(raw);
        if iban.len() < MIN_IBAN_LEN || !iban.is_ascii() {
            debug!(len = iban.len(), "IBAN rejected: too short or not ASCII");
            return false;
        }

        let rearranged = format!("{}{}", &iban[4..], &iban[..4]);
        match checksum_iso7064(&rearranged) {
            Ok(1) => {}
            Ok(checksum) => {
                debug!(checksum, "IBAN rejected: checksum mismatch");
                return false;
            }
            Err(e) => {
                debug!(error = %e, "IBAN rejected: checksum failed");
                return false;
            }
        }

        let country = &iban[..2];
        let Some(format) = iban_format(country) else {
            debug!(country, "IBAN rejected: unknown country");
            return false;
        };
        if iban.len() != format.length {
            debug!(
                country,
                expected = format.length,
                found = iban.len(),
                "IBAN rejected: wrong length"
            );
            return false;
        }

        if self.structure_check && !format.matches(&iban) {
            debug!(country, pattern = format.pattern, "IBAN rejected: pattern mismatch");
            return false;
        }

        true
    }
}

impl Default for IbanValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate an IBAN using checksum, length and (if enabled) structure.
/// Whitespace is ignored.
pub fn is_valid_iban(raw: &str) -> bool {
    IbanValidator::new().validate(raw)
}
