//! # pankki
//!
//! Validation and conversion of Finnish and international bank account
//! identifiers, plus decoding of the 54-character Finnish invoice barcode
//! (pankkiviivakoodi, version 4).
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Every check is a pure function over static tables; nothing talks to a bank.
//!
//! ## Quick Start
//!
//! ```rust
//! use pankki::*;
//!
//! // Legacy domestic account number → IBAN
//! let account = FinnishAccountNumber::from_bban("123456-785").unwrap();
//! assert_eq!(account.iban, "FI2112345600000785");
//! assert_eq!(account.bank.bic(), "NDEAFIHH");
//!
//! // IBAN validation for any registered country
//! assert!(is_valid_iban("FI21 1234 5600 0007 85"));
//! assert!(!is_valid_iban("FI21 1234 5600 0007 86"));
//!
//! // Creditor reference
//! assert!(is_valid_reference("1232").unwrap());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Checksums, IBAN validation, Finnish accounts and reference numbers |
//! | `barcode` (default) | 54-character invoice barcode decoder |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod iban;

#[cfg(feature = "core")]
pub mod finnish;

#[cfg(feature = "barcode")]
pub mod barcode;

// Re-export the common types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "core")]
pub use crate::finnish::*;

#[cfg(feature = "core")]
pub use crate::iban::{AccountNumber, BankAccount, IbanValidator, is_valid_iban};

#[cfg(feature = "barcode")]
pub use crate::barcode::InvoiceBarcode;
