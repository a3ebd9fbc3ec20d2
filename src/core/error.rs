use thiserror::Error;

/// Convenience alias used by every fallible constructor in the crate.
pub type Result<T> = std::result::Result<T, PankkiError>;

/// Errors that can occur while parsing or converting account identifiers.
///
/// Boolean validators such as [`crate::is_valid_iban`] never produce these
/// for merely invalid data; they are reserved for constructors and converters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PankkiError {
    /// A required value was empty.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Length, digit count or legacy checksum out of the allowed range.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// No bank in the registry matches the account number prefix.
    #[error("no bank found for account number '{0}'")]
    UnknownBank(String),

    /// The IBAN belongs to a different country than expected.
    #[error("wrong country code: expected '{expected}', found '{found}'")]
    WrongCountry {
        /// Country code the converter accepts.
        expected: String,
        /// Country code found in the input.
        found: String,
    },

    /// The barcode has the wrong length or one of its fields failed to decode.
    #[error("invalid barcode")]
    InvalidBarcode(#[source] Box<PankkiError>),

    /// A non-digit character appeared where only digits are allowed.
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character position in the normalized input.
        position: usize,
    },
}

impl PankkiError {
    /// Wrap any error as the cause of an [`PankkiError::InvalidBarcode`].
    pub(crate) fn barcode(cause: PankkiError) -> Self {
        Self::InvalidBarcode(Box::new(cause))
    }
}
