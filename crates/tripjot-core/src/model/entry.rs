use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A saved travel-preference record
///
/// Entries are immutable once created: loading one only copies its text back
/// into the draft for resubmission as a new entry, it never edits in place.
/// The persisted wire shape is `{id, text, createdAt}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceEntry {
    /// Unique identifier (UUID v4), generated at creation, never reused
    pub id: String,

    /// Non-empty, whitespace-trimmed preference text
    pub text: String,

    /// Human-readable creation timestamp
    ///
    /// A display string captured at creation time, not a machine-parseable
    /// contract.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl PreferenceEntry {
    /// Create a new entry from already-trimmed text
    ///
    /// Generates a fresh id and stamps the current local time. Callers are
    /// responsible for trimming the text and rejecting empty input first.
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            created_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry() {
        let entry = PreferenceEntry::new("Beach trip, budget 500".to_string());

        assert!(!entry.id.is_empty());
        assert_eq!(entry.text, "Beach trip, budget 500");
        assert!(!entry.created_at.is_empty());
    }

    #[test]
    fn test_new_entries_get_distinct_ids() {
        let a = PreferenceEntry::new("A".to_string());
        let b = PreferenceEntry::new("B".to_string());

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_wire_shape_uses_created_at_camel_case() {
        let entry = PreferenceEntry::new("Mountain trip".to_string());
        let json = serde_json::to_value(&entry).unwrap();

        let object = json.as_object().unwrap();
        assert!(object.contains_key("id"));
        assert!(object.contains_key("text"));
        assert!(object.contains_key("createdAt"));
        assert_eq!(object.len(), 3);
    }

    #[test]
    fn test_deserialize_round_trip() {
        let entry = PreferenceEntry::new("Estate in Grecia, budget 800".to_string());
        let json = serde_json::to_string(&entry).unwrap();
        let back: PreferenceEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(back, entry);
    }
}
