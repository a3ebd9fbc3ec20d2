//! Finnish invoice barcode (pankkiviivakoodi), version 4.
//!
//! A version 4 barcode is 54 digits:
//!
//! | Range | Field |
//! |-------|-------|
//! | 0 | version |
//! | 1–16 | IBAN without `FI` |
//! | 17–22 | euros |
//! | 23–24 | cents |
//! | 25–27 | reserved (zeros) |
//! | 28–47 | reference number |
//! | 48–53 | due date `yyMMdd` |
//!
//! # Example
//!
//! ```rust
//! use pankki::InvoiceBarcode;
//! use rust_decimal::Decimal;
//!
//! let barcode: InvoiceBarcode =
//!     "421123456000007850000105000000000000000001234561241231".parse().unwrap();
//! assert_eq!(barcode.amount, Decimal::new(1050, 2));
//! assert_eq!(barcode.account.bban, "123456-785");
//! assert!(barcode.is_valid());
//! ```

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{PankkiError, Result};
use crate::finnish::{FINLAND, FinnishAccountNumber, ReferenceNumber};

/// Length of a barcode in characters.
pub const BARCODE_LEN: usize = 54;

/// Date format of the due date field.
const DUE_DATE_FORMAT: &str = "%y%m%d";

/// Field layout: (name, start, length). Fields are contiguous and cover
/// all 54 characters.
const LAYOUT: [(&str, usize, usize); 7] = [
    ("version", 0, 1),
    ("iban", 1, 16),
    ("euros", 17, 6),
    ("cents", 23, 2),
    ("reserved", 25, 3),
    ("reference", 28, 20),
    ("due date", 48, 6),
];

/// A decoded invoice barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceBarcode {
    /// Barcode version digit.
    pub version: char,
    /// Payee IBAN.
    pub iban: String,
    /// Payee account, decoded from the IBAN.
    pub account: FinnishAccountNumber,
    /// Amount in euros. Zero means the payer enters the amount.
    pub amount: Decimal,
    /// Creditor reference.
    pub reference: ReferenceNumber,
    /// Due date; `None` when the field is zeros or not a calendar date.
    pub due_date: Option<NaiveDate>,
}

impl InvoiceBarcode {
    /// Decode a 54-character barcode.
    ///
    /// Any failure, including one in the account or reference field, is
    /// returned as [`PankkiError::InvalidBarcode`] wrapping the cause.
    pub fn parse(raw: &str) -> Result<Self> {
        Self::decode(raw).map_err(|e| {
            debug!(error = %e, "barcode rejected");
            PankkiError::barcode(e)
        })
    }

    fn decode(raw: &str) -> Result<Self> {
        let len = raw.chars().count();
        if len != BARCODE_LEN {
            return Err(PankkiError::InvalidFormat(format!(
                "barcode length should be {BARCODE_LEN}, is {len}"
            )));
        }
        if let Some((position, character)) = raw.chars().enumerate().find(|(_, c)| !c.is_ascii())
        {
            return Err(PankkiError::InvalidCharacter {
                character,
                position,
            });
        }

        let [version, iban_body, euros, cents, reserved, reference, due_date] = split_fields(raw);

        parse_digits(version, LAYOUT[0].1)?;
        let version = char::from(raw.as_bytes()[0]);

        let iban = format!("{FINLAND}{iban_body}");
        let account = FinnishAccountNumber::from_iban(&iban)?;

        let euros = parse_digits(euros, LAYOUT[2].1)?;
        let cents = parse_digits(cents, LAYOUT[3].1)?;
        parse_digits(reserved, LAYOUT[4].1)?;
        let amount = Decimal::new(euros * 100 + cents, 2);

        let reference = ReferenceNumber::new(reference)?;

        let due_date = match NaiveDate::parse_from_str(due_date, DUE_DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(e) => {
                debug!(due_date, error = %e, "barcode due date ignored");
                None
            }
        };

        Ok(Self {
            version,
            iban,
            account,
            amount,
            reference,
            due_date,
        })
    }

    /// Whether both the IBAN and the reference number pass their checksums.
    pub fn is_valid(&self) -> bool {
        self.account.is_valid() && self.reference.is_valid()
    }
}

impl FromStr for InvoiceBarcode {
    type Err = PankkiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Slice an ASCII barcode of [`BARCODE_LEN`] characters by [`LAYOUT`].
fn split_fields(raw: &str) -> [&str; 7] {
    LAYOUT.map(|(_, start, len)| &raw[start..start + len])
}

/// Parse a field of ASCII digits. `offset` is the field start, used to
/// report the absolute position of a bad character.
fn parse_digits(field: &str, offset: usize) -> Result<i64> {
    field.chars().enumerate().try_fold(0i64, |acc, (i, c)| {
        c.to_digit(10)
            .map(|d| acc * 10 + i64::from(d))
            .ok_or(PankkiError::InvalidCharacter {
                character: c,
                position: offset + i,
            })
    })
}
