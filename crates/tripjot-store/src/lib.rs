//! Tripjot Store - Persistence layer for the travel-preference jotter
//!
//! Provides:
//! - The KeyValueBackend port the store is constructed over
//! - A HashMap-backed MemoryBackend for tests and ephemeral sessions
//! - A SQLite-backed durable backend
//! - PreferenceStore, the view-model owning the saved-entries list

pub mod backend;
pub mod errors;
pub mod prefs;
pub mod sqlite;

// Re-export key types
pub use backend::{KeyValueBackend, MemoryBackend};
pub use errors::Result;
pub use prefs::{PreferenceStore, PREFS_KEY};
pub use sqlite::SqliteBackend;
