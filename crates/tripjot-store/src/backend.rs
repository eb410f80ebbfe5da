//! Key-value backend port
//!
//! The durable backend is injected into PreferenceStore at construction so
//! tests can swap in an in-memory fake; there is no ambient singleton.

use std::collections::HashMap;

use crate::errors::Result;

/// Synchronous key-value port the preference store is built over
///
/// One logical writer at a time: read-modify-write over the stored list is
/// not atomic across separate get/set calls, so callers must serialize
/// mutations.
pub trait KeyValueBackend {
    /// Read the value for a key, None when absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write the full value for a key, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete a key; deleting an absent key is a no-op
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// HashMap-backed backend for tests and ephemeral sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    data: HashMap<String, String>,
}

impl MemoryBackend {
    /// Create a new empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a key is present
    ///
    /// Lets tests distinguish an absent key from one holding an empty array.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.data.remove(key);
        Ok(())
    }
}
