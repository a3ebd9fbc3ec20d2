use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::error::{PankkiError, Result};

/// Branch code reported for 8-character BICs (ISO 9362 primary office).
pub const PRIMARY_OFFICE_BRANCH: &str = "XXX";

/// A bank identified by its BIC (ISO 9362).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BankInfo {
    bic: String,
    name: Option<String>,
}

impl BankInfo {
    /// Create from a BIC of 8 or 11 characters. The BIC is upper-cased.
    pub fn new(bic: &str) -> Result<Self> {
        let len = bic.chars().count();
        if len != 8 && len != 11 {
            return Err(PankkiError::InvalidFormat(format!(
                "BIC must be 8 or 11 characters (ISO 9362), got {len}"
            )));
        }
        if !bic.is_ascii() {
            return Err(PankkiError::InvalidFormat(format!(
                "BIC '{bic}' contains non-ASCII characters"
            )));
        }
        Ok(Self {
            bic: bic.to_ascii_uppercase(),
            name: None,
        })
    }

    /// Create from a BIC and a display name.
    pub fn with_name(bic: &str, name: impl Into<String>) -> Result<Self> {
        let mut info = Self::new(bic)?;
        info.name = Some(name.into());
        Ok(info)
    }

    /// The full BIC.
    pub fn bic(&self) -> &str {
        &self.bic
    }

    /// Display name of the bank, if known.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Four-letter institution code.
    pub fn bank_code(&self) -> &str {
        &self.bic[..4]
    }

    /// ISO 3166-1 country code.
    pub fn country_code(&self) -> &str {
        &self.bic[4..6]
    }

    /// Two-character location code.
    pub fn location_code(&self) -> &str {
        &self.bic[6..8]
    }

    /// Whether the BIC names the primary office (8 characters, no branch).
    pub fn is_primary_office(&self) -> bool {
        self.bic.len() == 8
    }

    /// Branch code, or `"XXX"` when the BIC has no branch part.
    pub fn branch_code(&self) -> &str {
        if self.is_primary_office() {
            PRIMARY_OFFICE_BRANCH
        } else {
            &self.bic[8..11]
        }
    }
}

impl fmt::Display for BankInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bic)
    }
}

/// A Finnish bank together with the position where the free account
/// digits start inside the 14-digit machine BBAN (6 or 7).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FinnishBankInfo {
    /// The bank identity.
    pub bank: BankInfo,
    /// Offset of the account digits in the machine BBAN.
    pub bban_offset: usize,
}

impl FinnishBankInfo {
    /// Create from a BIC, the BBAN offset and a display name.
    pub fn new(bic: &str, bban_offset: usize, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            bank: BankInfo::with_name(bic, name)?,
            bban_offset,
        })
    }
}

impl Deref for FinnishBankInfo {
    type Target = BankInfo;

    fn deref(&self) -> &BankInfo {
        &self.bank
    }
}

impl fmt::Display for FinnishBankInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.bank.fmt(f)
    }
}
