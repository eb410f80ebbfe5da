use thiserror::Error;

/// Result type alias using PrefError
pub type Result<T> = std::result::Result<T, PrefError>;

/// Canonical error taxonomy for tripjot
///
/// Corrupt persisted data is deliberately absent from this taxonomy: the
/// store recovers from it at initialize time and never raises it.
#[derive(Debug, Error)]
pub enum PrefError {
    /// Empty or whitespace-only draft passed to save
    #[error("Draft text cannot be empty or whitespace-only")]
    EmptyDraft,

    /// Entry lookup by id failed
    ///
    /// Raised by surfaces that need a specific entry (the CLI load path);
    /// the store's own remove stays a no-op for unknown ids.
    #[error("Entry not found: {id}")]
    EntryNotFound { id: String },

    /// Backend read/write failure, fatal to the operation (no retry policy)
    #[error("Backend {op} failed: {reason}")]
    Backend { op: String, reason: String },

    /// Entry list could not be encoded as JSON
    #[error("Failed to encode entries: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PrefError {
    /// Create a backend error with operation context
    pub fn backend(op: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        PrefError::Backend {
            op: op.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_draft_display() {
        let err = PrefError::EmptyDraft;
        assert_eq!(err.to_string(), "Draft text cannot be empty or whitespace-only");
    }

    #[test]
    fn test_entry_not_found_carries_id() {
        let err = PrefError::EntryNotFound {
            id: "abc-123".to_string(),
        };
        assert_eq!(err.to_string(), "Entry not found: abc-123");
    }

    #[test]
    fn test_backend_helper() {
        let err = PrefError::backend("set", "disk full");
        assert!(matches!(err, PrefError::Backend { .. }));
        assert_eq!(err.to_string(), "Backend set failed: disk full");
    }
}
