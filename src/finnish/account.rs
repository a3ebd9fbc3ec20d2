//! Finnish bank accounts: legacy BBAN ↔ IBAN conversion.
//!
//! Before 2012 Finnish accounts were written as `nnnnnn-nn[nnnnnn]`: a bank
//! part, a hyphen and a variable-length account part. The 14-digit machine
//! form pads the account part with zeros at a bank-specific offset, and the
//! IBAN is `FI` + check digits + machine form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::normalize::{digits_only, strip_whitespace};
use crate::core::{
    BankInfo, FinnishBankInfo, MACHINE_BBAN_LEN, PankkiError, Result, checksum_iso7064,
    luhn_bban_valid,
};
use crate::iban::{AccountNumber, BankAccount, is_valid_iban};

use super::registry::BankRegistry;

/// Country code of Finnish IBANs.
pub const FINLAND: &str = "FI";

/// `FI00` with letters expanded, appended to the BBAN when computing check digits.
const FI_CHECK_SUFFIX: &str = "151800";

/// Shortest legacy account: `123456-12`.
const MIN_BBAN_DIGITS: usize = 8;

/// A Finnish bank account in all three representations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinnishAccountNumber {
    /// Whitespace-free IBAN, e.g. `FI2112345600000785`.
    pub iban: String,
    /// Servicing bank.
    pub bank: FinnishBankInfo,
    /// Legacy human form, e.g. `123456-785`.
    pub bban: String,
    /// 14-digit machine form, e.g. `12345600000785`.
    pub machine_bban: String,
}

impl FinnishAccountNumber {
    /// Parse a legacy `nnnnnn-nn[nnnnnn]` account and convert it to IBAN.
    /// All non-digit characters are ignored.
    pub fn from_bban(raw: &str) -> Result<Self> {
        Self::from_bban_in(raw, &BankRegistry::finnish())
    }

    /// Like [`Self::from_bban`], resolving the bank in `registry`.
    pub fn from_bban_in(raw: &str, registry: &BankRegistry) -> Result<Self> {
        let digits = digits_only(raw);
        if !(MIN_BBAN_DIGITS..=MACHINE_BBAN_LEN).contains(&digits.len()) {
            return Err(PankkiError::InvalidFormat(format!(
                "BBAN must have {MIN_BBAN_DIGITS} to {MACHINE_BBAN_LEN} digits, got {}",
                digits.len()
            )));
        }

        let bank = registry.lookup(&digits)?;
        let machine_bban = to_machine_bban(&digits, bank.bban_offset)?;

        if !luhn_bban_valid(&machine_bban) {
            debug!(machine_bban = %machine_bban, "BBAN rejected: legacy checksum mismatch");
            return Err(PankkiError::InvalidFormat(format!(
                "BBAN '{raw}' fails the legacy checksum"
            )));
        }

        let iban = bban_to_iban(&machine_bban)?;
        let bban = machine_to_human_bban(&machine_bban, &bank);
        Ok(Self {
            iban,
            bank,
            bban,
            machine_bban,
        })
    }

    /// Create from a Finnish IBAN. Whitespace is ignored.
    ///
    /// The IBAN checksum is not verified here; use [`Self::is_valid`] or
    /// [`is_valid_iban`] when the input is untrusted.
    pub fn from_iban(raw: &str) -> Result<Self> {
        Self::from_iban_in(raw, &BankRegistry::finnish())
    }

    /// Like [`Self::from_iban`], resolving the bank in `registry`.
    pub fn from_iban_in(raw: &str, registry: &BankRegistry) -> Result<Self> {
        let iban = strip_whitespace(raw);
        if iban.is_empty() {
            return Err(PankkiError::InvalidInput("IBAN cannot be empty".into()));
        }
        if !iban.starts_with(FINLAND) {
            return Err(PankkiError::WrongCountry {
                expected: FINLAND.into(),
                found: iban.chars().take(2).collect(),
            });
        }

        let machine_bban = match iban.get(4..) {
            Some(m) if m.len() == MACHINE_BBAN_LEN && m.bytes().all(|b| b.is_ascii_digit()) => {
                m.to_string()
            }
            _ => {
                return Err(PankkiError::InvalidFormat(format!(
                    "Finnish IBAN must be FI + 2 check digits + {MACHINE_BBAN_LEN} digits, got '{iban}'"
                )));
            }
        };

        let bank = registry.lookup(&machine_bban)?;
        let bban = machine_to_human_bban(&machine_bban, &bank);
        Ok(Self {
            iban,
            bank,
            bban,
            machine_bban,
        })
    }

    /// Full IBAN validation (checksum, length, structure).
    pub fn is_valid(&self) -> bool {
        is_valid_iban(&self.iban)
    }

    /// Whether the machine BBAN passes the pre-2012 legacy checksum.
    ///
    /// Always true for accounts built by [`Self::from_bban`]; IBAN-only banks
    /// may fail it.
    pub fn is_legacy_valid(&self) -> bool {
        luhn_bban_valid(&self.machine_bban)
    }
}

impl BankAccount for FinnishAccountNumber {
    fn iban(&self) -> Option<&str> {
        Some(&self.iban)
    }

    fn bank(&self) -> Option<&BankInfo> {
        Some(&self.bank.bank)
    }
}

impl From<FinnishAccountNumber> for AccountNumber {
    fn from(account: FinnishAccountNumber) -> Self {
        Self {
            iban: Some(account.iban),
            bank: Some(account.bank.bank),
        }
    }
}

impl fmt::Display for FinnishAccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iban)
    }
}

impl FromStr for FinnishAccountNumber {
    type Err = PankkiError;

    /// Accepts an IBAN (starts with a letter) or a legacy BBAN.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim_start().chars().next() {
            Some(c) if c.is_alphabetic() => Self::from_iban(s),
            _ => Self::from_bban(s),
        }
    }
}

/// Pad a legacy BBAN to 14 digits by inserting zeros at `offset`.
fn to_machine_bban(digits: &str, offset: usize) -> Result<String> {
    if offset > digits.len() {
        return Err(PankkiError::InvalidFormat(format!(
            "BBAN '{digits}' is shorter than the bank offset {offset}"
        )));
    }
    let padding = "0".repeat(MACHINE_BBAN_LEN - digits.len());
    Ok(format!("{}{padding}{}", &digits[..offset], &digits[offset..]))
}

/// Compute the Finnish IBAN for a 14-digit machine BBAN.
///
/// ```rust
/// assert_eq!(pankki::bban_to_iban("12345600000785").unwrap(), "FI2112345600000785");
/// ```
pub fn bban_to_iban(machine_bban: &str) -> Result<String> {
    let checksum = checksum_iso7064(&format!("{machine_bban}{FI_CHECK_SUFFIX}"))?;
    Ok(format!("{FINLAND}{:02}{machine_bban}", 98 - checksum))
}

/// Convert a 14-digit machine BBAN to the legacy human form: a hyphen at the
/// bank offset and the zero padding after it removed.
///
/// ```rust
/// use pankki::*;
///
/// let bank = BankRegistry::finnish().lookup("12345600000785").unwrap();
/// assert_eq!(machine_to_human_bban("12345600000785", &bank), "123456-785");
/// ```
pub fn machine_to_human_bban(machine_bban: &str, bank: &FinnishBankInfo) -> String {
    let (bank_part, account_part) = machine_bban
        .split_at_checked(bank.bban_offset)
        .unwrap_or((machine_bban, ""));
    format!("{bank_part}-{}", account_part.trim_start_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finnish::registry::BankEntry;

    #[test]
    fn nordea_legacy_to_iban() {
        let account = FinnishAccountNumber::from_bban("123456-785").unwrap();
        assert_eq!(account.machine_bban, "12345600000785");
        assert_eq!(account.iban, "FI2112345600000785");
        assert_eq!(account.bban, "123456-785");
        assert_eq!(account.bank.bic(), "NDEAFIHH");
        assert!(account.is_valid());
        assert!(account.is_legacy_valid());
    }

    #[test]
    fn offset_seven_pads_after_seventh_digit() {
        // Aktia: zeros go after "4234567", not after "423456"
        let account = FinnishAccountNumber::from_bban("423456-781").unwrap();
        assert_eq!(account.machine_bban, "42345670000081");
        assert_eq!(account.iban, "FI5542345670000081");
        assert_eq!(account.bban, "4234567-81");
    }

    #[test]
    fn hyphen_position_is_ignored() {
        let a = FinnishAccountNumber::from_bban("500001-2253504").unwrap();
        let b = FinnishAccountNumber::from_bban("5000012-253504").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.machine_bban, "50000120253504");
        assert_eq!(a.iban, "FI3550000120253504");
    }

    #[test]
    fn full_length_bban_is_unchanged() {
        let account = FinnishAccountNumber::from_bban("31000010000001").unwrap();
        assert_eq!(account.machine_bban, "31000010000001");
        assert_eq!(account.iban, "FI1831000010000001");
        assert_eq!(account.bban, "310000-10000001");
    }

    #[test]
    fn digit_count_out_of_range() {
        assert!(matches!(
            FinnishAccountNumber::from_bban("123456-7"),
            Err(PankkiError::InvalidFormat(_))
        ));
        assert!(matches!(
            FinnishAccountNumber::from_bban("123456-123456789"),
            Err(PankkiError::InvalidFormat(_))
        ));
        assert!(FinnishAccountNumber::from_bban("").is_err());
    }

    #[test]
    fn unknown_bank() {
        assert!(matches!(
            FinnishAccountNumber::from_bban("923456-785"),
            Err(PankkiError::UnknownBank(_))
        ));
    }

    #[test]
    fn legacy_checksum_failure() {
        assert!(matches!(
            FinnishAccountNumber::from_bban("123456-786"),
            Err(PankkiError::InvalidFormat(_))
        ));
    }

    #[test]
    fn from_iban() {
        let account = FinnishAccountNumber::from_iban("FI21 1234 5600 0007 85").unwrap();
        assert_eq!(account.iban, "FI2112345600000785");
        assert_eq!(account.machine_bban, "12345600000785");
        assert_eq!(account.bban, "123456-785");
        assert_eq!(account.bank.bic(), "NDEAFIHH");
    }

    #[test]
    fn from_iban_skips_legacy_checksum() {
        // IBAN-only bank, machine BBAN not Luhn-valid
        let account = FinnishAccountNumber::from_iban("FI2471100000000001").unwrap();
        assert_eq!(account.bank.bic(), "BSUIFIHH");
        assert_eq!(account.bban, "711000-1");
        assert!(account.is_valid());
        assert!(!account.is_legacy_valid());
    }

    #[test]
    fn from_iban_wrong_country() {
        assert_eq!(
            FinnishAccountNumber::from_iban("SE4550000000058398257466"),
            Err(PankkiError::WrongCountry {
                expected: "FI".into(),
                found: "SE".into(),
            })
        );
    }

    #[test]
    fn from_iban_bad_body() {
        assert!(matches!(
            FinnishAccountNumber::from_iban("FI211234560000078"),
            Err(PankkiError::InvalidFormat(_))
        ));
        assert!(matches!(
            FinnishAccountNumber::from_iban("FI21123456000007A5"),
            Err(PankkiError::InvalidFormat(_))
        ));
        assert!(matches!(
            FinnishAccountNumber::from_iban(""),
            Err(PankkiError::InvalidInput(_))
        ));
    }

    #[test]
    fn custom_registry() {
        static TABLE: &[BankEntry] = &[BankEntry {
            prefix: "9",
            bic: "TESTFIHH",
            bban_offset: 6,
            name: "Test Bank",
        }];
        let registry = BankRegistry::new(TABLE);
        let account = FinnishAccountNumber::from_iban_in("FI2090000000000001", &registry);
        assert_eq!(account.unwrap().bank.bic(), "TESTFIHH");
        assert!(FinnishAccountNumber::from_iban("FI2090000000000001").is_err());
    }

    #[test]
    fn parse_either_form() {
        let a: FinnishAccountNumber = "123456-785".parse().unwrap();
        let b: FinnishAccountNumber = "FI21 1234 5600 0007 85".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "FI2112345600000785");
    }

    #[test]
    fn converts_to_generic_account() {
        let account = FinnishAccountNumber::from_bban("123456-785").unwrap();
        assert_eq!(account.country_code(), Some("FI"));
        let generic = AccountNumber::from(account);
        assert_eq!(generic.iban.as_deref(), Some("FI2112345600000785"));
        assert_eq!(generic.bank.unwrap().bic(), "NDEAFIHH");
    }

    #[test]
    fn machine_padding() {
        assert_eq!(to_machine_bban("12345678", 6).unwrap(), "12345600000078");
        assert_eq!(to_machine_bban("12345678", 7).unwrap(), "12345670000008");
        assert!(to_machine_bban("12345678", 9).is_err());
    }
}
