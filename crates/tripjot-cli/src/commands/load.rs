//! Load command
//!
//! Usage: tripjot load <ID>
//!
//! Prints a saved entry's text so it can be edited and resubmitted as a new
//! entry; saved entries are never edited in place.

use clap::Args;
use std::error::Error;
use std::path::Path;

use tripjot_core::PrefError;

#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Entry id to load
    pub id: String,
}

/// Execute load command
pub fn execute(args: LoadArgs, db: &Path) -> Result<(), Box<dyn Error>> {
    let store = super::open_store(db)?;

    let entry = store
        .entries()
        .iter()
        .find(|entry| entry.id == args.id)
        .ok_or(PrefError::EntryNotFound { id: args.id.clone() })?;

    println!("{}", entry.text);
    Ok(())
}
