//! CLI command implementations

pub mod clear;
pub mod edit;
pub mod list;
pub mod load;
pub mod remove;
pub mod save;

use std::error::Error;
use std::path::Path;

use tripjot_store::{PreferenceStore, SqliteBackend};

/// Open the durable backend and initialize a store over it
///
/// Creates the database's parent directory on first use.
pub fn open_store(db: &Path) -> Result<PreferenceStore<SqliteBackend>, Box<dyn Error>> {
    if let Some(parent) = db.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let backend = SqliteBackend::open(db)?;
    Ok(PreferenceStore::initialize(backend)?)
}
