//! Finnish bank identifiers (rahalaitostunnukset) and their BICs.

use tracing::trace;

use crate::core::{FinnishBankInfo, PankkiError, Result};

/// One registry row: account number prefix → bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankEntry {
    /// Leading digits of the account number (1 to 3 digits).
    pub prefix: &'static str,
    /// BIC of the bank.
    pub bic: &'static str,
    /// Where the account digits start in the 14-digit machine BBAN.
    pub bban_offset: usize,
    /// Bank name.
    pub name: &'static str,
}

/// Finnish banks by account number prefix.
pub static FINNISH_BANKS: &[BankEntry] = &[
    BankEntry {
        prefix: "1",
        bic: "NDEAFIHH",
        bban_offset: 6,
        name: "Nordea Pankki",
    },
    BankEntry {
        prefix: "2",
        bic: "NDEAFIHH",
        bban_offset: 6,
        name: "Nordea Pankki",
    },
    BankEntry {
        prefix: "31",
        bic: "HANDFIHH",
        bban_offset: 6,
        name: "Handelsbanken",
    },
    BankEntry {
        prefix: "33",
        bic: "ESSEFIHX",
        bban_offset: 6,
        name: "Skandinaviska Enskilda Banken",
    },
    BankEntry {
        prefix: "34",
        bic: "DABAFIHX",
        bban_offset: 6,
        name: "Danske Bank",
    },
    BankEntry {
        prefix: "36",
        bic: "TAPIFI22",
        bban_offset: 6,
        name: "Tapiola Pankki",
    },
    BankEntry {
        prefix: "37",
        bic: "DNBAFIHX",
        bban_offset: 6,
        name: "DNB Bank ASA, Finland Branch",
    },
    BankEntry {
        prefix: "38",
        bic: "SWEDFIHH",
        bban_offset: 6,
        name: "Swedbank",
    },
    BankEntry {
        prefix: "39",
        bic: "SBANFIHH",
        bban_offset: 6,
        name: "S-Pankki",
    },
    BankEntry {
        prefix: "4",
        bic: "HELSFIHH",
        bban_offset: 7,
        name: "Aktia Pankki, Säästöpankit (Sp) ja POP",
    },
    BankEntry {
        prefix: "5",
        bic: "OKOYFIHH",
        bban_offset: 7,
        name: "OP-Pohjola (Osuuspankki)",
    },
    BankEntry {
        prefix: "6",
        bic: "AABAFI22",
        bban_offset: 6,
        name: "Ålandsbanken",
    },
    // 711, 713 and 715 only ever issued IBANs
    BankEntry {
        prefix: "711",
        bic: "BSUIFIHH",
        bban_offset: 6,
        name: "Calyon",
    },
    BankEntry {
        prefix: "713",
        bic: "CITIFIHX",
        bban_offset: 6,
        name: "Citibank",
    },
    BankEntry {
        prefix: "715",
        bic: "ITELFIHH",
        bban_offset: 6,
        name: "Itella Pankki",
    },
    BankEntry {
        prefix: "8",
        bic: "DABAFIHH",
        bban_offset: 6,
        name: "Sampo Pankki",
    },
];

/// Longest prefix tried by [`BankRegistry::lookup`].
const MAX_PREFIX_LEN: usize = 3;

/// An immutable prefix → bank table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankRegistry {
    entries: &'static [BankEntry],
}

impl BankRegistry {
    /// Create a registry over a custom table.
    pub const fn new(entries: &'static [BankEntry]) -> Self {
        Self { entries }
    }

    /// The bundled Finnish registry.
    pub const fn finnish() -> Self {
        Self::new(FINNISH_BANKS)
    }

    /// All rows of the registry.
    pub fn entries(&self) -> &'static [BankEntry] {
        self.entries
    }

    /// Prefix match by numeric value, so `"031"` finds the row `"31"`.
    pub fn get(&self, prefix: &str) -> Option<&'static BankEntry> {
        let key = numeric_key(prefix);
        self.entries.iter().find(|e| numeric_key(e.prefix) == key)
    }

    /// Find the bank of an account number.
    ///
    /// Tries the first 1, 2 and 3 characters in that order, each compared by
    /// numeric value; the shortest matching prefix wins even when a longer
    /// one would also match.
    pub fn lookup(&self, account: &str) -> Result<FinnishBankInfo> {
        for len in 1..=MAX_PREFIX_LEN {
            let Some(prefix) = account.get(..len) else {
                break;
            };
            if let Some(entry) = self.get(prefix) {
                trace!(prefix, bic = entry.bic, "bank found");
                return FinnishBankInfo::new(entry.bic, entry.bban_offset, entry.name);
            }
        }
        Err(PankkiError::UnknownBank(account.to_string()))
    }
}

/// A digit string with its leading zeros removed; all zeros is `"0"`.
fn numeric_key(digits: &str) -> &str {
    match digits.trim_start_matches('0') {
        "" if !digits.is_empty() => "0",
        key => key,
    }
}

impl Default for BankRegistry {
    fn default() -> Self {
        Self::finnish()
    }
}
