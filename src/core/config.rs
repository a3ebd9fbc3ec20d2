//! Process-wide validation settings.

use std::sync::atomic::{AtomicBool, Ordering};

static STRUCTURE_VALIDATION: AtomicBool = AtomicBool::new(true);

/// Enable or disable the per-country IBAN structure check (default: enabled).
///
/// Disable it when the structure table lags behind a registry update and
/// checksum plus length checks are enough. [`crate::IbanValidator`] can
/// override this per validator.
pub fn set_structure_validation(enabled: bool) {
    STRUCTURE_VALIDATION.store(enabled, Ordering::Relaxed);
}

/// Whether the per-country IBAN structure check is enabled.
pub fn structure_validation_enabled() -> bool {
    STRUCTURE_VALIDATION.load(Ordering::Relaxed)
}
