//! List command
//!
//! Usage: tripjot list

use clap::Args;
use std::error::Error;
use std::path::Path;

#[derive(Debug, Args)]
pub struct ListArgs {}

/// Execute list command
pub fn execute(_args: ListArgs, db: &Path) -> Result<(), Box<dyn Error>> {
    let store = super::open_store(db)?;

    if store.entries().is_empty() {
        println!("No preferences saved yet.");
        return Ok(());
    }

    for entry in store.entries() {
        println!("{}  {}", entry.created_at, entry.id);
        println!("    {}", entry.text.replace('\n', "\n    "));
    }

    Ok(())
}
