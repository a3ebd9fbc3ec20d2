use serde::{Deserialize, Serialize};

use crate::core::normalize::strip_whitespace;
use crate::core::{BankInfo, PankkiError, Result};

use super::is_valid_iban;

/// Common view over every account representation.
pub trait BankAccount {
    /// The account as a whitespace-free IBAN, if known.
    fn iban(&self) -> Option<&str>;

    /// The servicing bank, if known.
    fn bank(&self) -> Option<&BankInfo>;

    /// Country code of the IBAN.
    fn country_code(&self) -> Option<&str> {
        self.iban().and_then(|iban| iban.get(..2))
    }
}

/// A country-independent bank account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountNumber {
    /// Whitespace-free IBAN.
    pub iban: Option<String>,
    /// Servicing bank.
    pub bank: Option<BankInfo>,
}

impl AccountNumber {
    /// Create from an IBAN of any registered country.
    ///
    /// Fails with [`PankkiError::InvalidFormat`] when [`is_valid_iban`]
    /// rejects the input.
    pub fn from_iban(raw: &str) -> Result<Self> {
        let iban = strip_whitespace(raw);
        if iban.is_empty() {
            return Err(PankkiError::InvalidInput("IBAN cannot be empty".into()));
        }
        if !is_valid_iban(&iban) {
            return Err(PankkiError::InvalidFormat(format!("'{iban}' is not a valid IBAN")));
        }
        Ok(Self {
            iban: Some(iban),
            bank: None,
        })
    }

    /// Attach the servicing bank.
    pub fn with_bank(mut self, bank: BankInfo) -> Self {
        self.bank = Some(bank);
        self
    }
}

impl BankAccount for AccountNumber {
    fn iban(&self) -> Option<&str> {
        self.iban.as_deref()
    }

    fn bank(&self) -> Option<&BankInfo> {
        self.bank.as_ref()
    }
}
