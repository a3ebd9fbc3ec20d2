//! Shared building blocks: errors, bank identity, checksums and settings.

mod bank;
mod checksum;
mod config;
mod error;
pub(crate) mod normalize;

pub use bank::*;
pub use checksum::*;
pub use config::*;
pub use error::*;
