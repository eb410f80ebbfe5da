//! Error handling for tripjot-store
//!
//! Wraps the tripjot-core taxonomy with store-specific helpers

use tripjot_core::errors::PrefError;

/// Result type alias using PrefError
pub type Result<T> = std::result::Result<T, PrefError>;

/// Create a backend error from rusqlite::Error
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> PrefError {
    PrefError::backend(op, err)
}
