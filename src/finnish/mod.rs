//! Finnish account numbers, bank registry and creditor references.
//!
//! # Example
//!
//! ```rust
//! use pankki::finnish::*;
//!
//! let account = FinnishAccountNumber::from_bban("423456-781").unwrap();
//! assert_eq!(account.machine_bban, "42345670000081");
//! assert_eq!(account.bban, "4234567-81");
//!
//! let reference = ReferenceNumber::new("12 34561").unwrap();
//! assert!(reference.is_valid());
//! ```

mod account;
mod reference;
mod registry;

pub use account::{FINLAND, FinnishAccountNumber, bban_to_iban, machine_to_human_bban};
pub use reference::{ReferenceNumber, is_valid_reference};
pub use registry::{BankEntry, BankRegistry, FINNISH_BANKS};
