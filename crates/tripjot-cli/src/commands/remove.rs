//! Remove command
//!
//! Usage: tripjot remove <ID>

use clap::Args;
use std::error::Error;
use std::path::Path;

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Entry id to delete
    pub id: String,
}

/// Execute remove command
pub fn execute(args: RemoveArgs, db: &Path) -> Result<(), Box<dyn Error>> {
    let mut store = super::open_store(db)?;

    let before = store.entries().len();
    let remaining = store.remove(&args.id)?.len();

    if remaining == before {
        println!("No entry with id {}", args.id);
    } else {
        println!("✓ Removed {} ({} left)", args.id, remaining);
    }

    Ok(())
}
