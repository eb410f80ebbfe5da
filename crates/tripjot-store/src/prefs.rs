//! The preference store
//!
//! Owns the ordered list of saved entries and keeps the backend's single
//! well-known key in sync with it after every mutating operation.

use tripjot_core::errors::{PrefError, Result};
use tripjot_core::model::PreferenceEntry;

use crate::backend::KeyValueBackend;

/// Well-known backend key holding the JSON-encoded entry array
pub const PREFS_KEY: &str = "travel_prefs";

/// View-model over the saved-entries list, mirrored into a key-value backend
///
/// Single-threaded and synchronous: every operation runs to completion
/// before returning, and the in-memory list equals the persisted collection
/// after every mutation. Mutations write the full list, never a delta.
pub struct PreferenceStore<B: KeyValueBackend> {
    backend: B,
    entries: Vec<PreferenceEntry>,
}

impl<B: KeyValueBackend> PreferenceStore<B> {
    /// Load the persisted entry list and build a store over the backend
    ///
    /// An absent key yields an empty list. Corrupt persisted data fails
    /// soft: the store starts empty (or drops only the malformed elements)
    /// without raising and without writing back to the backend.
    ///
    /// # Errors
    /// * `Backend` - if the backend read itself fails
    pub fn initialize(backend: B) -> Result<Self> {
        let entries = match backend.get(PREFS_KEY)? {
            Some(raw) => parse_entries(&raw),
            None => Vec::new(),
        };

        tracing::debug!(count = entries.len(), "initialized preference store");
        Ok(Self { backend, entries })
    }

    /// The current entry list, newest first
    pub fn entries(&self) -> &[PreferenceEntry] {
        &self.entries
    }

    /// The backend the store was constructed over
    ///
    /// Lets callers and tests inspect persisted state (e.g. key absence
    /// after remove_all).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Save the draft text as a new entry at the head of the list
    ///
    /// Trims the text, refuses empty input, prepends a freshly-created
    /// entry, and writes the full updated list to the backend before the
    /// in-memory list advances, so a failed write leaves the store
    /// unchanged. The updated list is observable via [`entries`].
    ///
    /// [`entries`]: PreferenceStore::entries
    ///
    /// # Errors
    /// * `EmptyDraft` - if the text is empty or whitespace-only
    /// * `Serialize` - if the updated list cannot be encoded
    /// * `Backend` - if the backend write fails
    pub fn save(&mut self, draft_text: &str) -> Result<PreferenceEntry> {
        let text = draft_text.trim();
        if text.is_empty() {
            return Err(PrefError::EmptyDraft);
        }

        let entry = PreferenceEntry::new(text.to_string());

        // Newest first
        let mut updated = Vec::with_capacity(self.entries.len() + 1);
        updated.push(entry.clone());
        updated.extend(self.entries.iter().cloned());

        self.write_list(&updated)?;
        self.entries = updated;

        tracing::debug!(id = %entry.id, "saved preference entry");
        Ok(entry)
    }

    /// Remove the entry with the given id
    ///
    /// An unknown id is a no-op, not an error: the list comes back with the
    /// same entries in the same order. The filtered list replaces the
    /// persisted value in full.
    ///
    /// # Errors
    /// * `Serialize` - if the updated list cannot be encoded
    /// * `Backend` - if the backend write fails
    pub fn remove(&mut self, id: &str) -> Result<&[PreferenceEntry]> {
        let updated: Vec<PreferenceEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();

        self.write_list(&updated)?;
        self.entries = updated;

        tracing::debug!(id, count = self.entries.len(), "removed preference entry");
        Ok(&self.entries)
    }

    /// Delete every entry and the backend key itself
    ///
    /// Absence is the canonical "no data" representation understood by
    /// [`initialize`], so the key is removed rather than overwritten with an
    /// empty array. Idempotent.
    ///
    /// [`initialize`]: PreferenceStore::initialize
    ///
    /// # Errors
    /// * `Backend` - if the backend delete fails
    pub fn remove_all(&mut self) -> Result<()> {
        self.backend.remove(PREFS_KEY)?;
        self.entries.clear();

        tracing::debug!("removed all preference entries");
        Ok(())
    }

    fn write_list(&mut self, entries: &[PreferenceEntry]) -> Result<()> {
        let json = serde_json::to_string(entries)?;
        self.backend.set(PREFS_KEY, &json)
    }
}

/// Parse the persisted value, keeping whatever deserializes cleanly
///
/// Whole-value parse failure recovers to an empty list; element-level shape
/// mismatches drop only the offending elements. Nothing is written back on
/// recovery.
fn parse_entries(raw: &str) -> Vec<PreferenceEntry> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(error) => {
            tracing::warn!(%error, "persisted preferences are not a JSON array, starting empty");
            return Vec::new();
        }
    };

    let total = values.len();
    let entries: Vec<PreferenceEntry> = values
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();

    if entries.len() < total {
        tracing::warn!(
            dropped = total - entries.len(),
            "dropped malformed preference entries"
        );
    }

    entries
}
