//! Save command
//!
//! Usage: tripjot save <TEXT>

use clap::Args;
use std::error::Error;
use std::path::Path;

#[derive(Debug, Args)]
pub struct SaveArgs {
    /// Preference text to save
    pub text: String,
}

/// Execute save command
pub fn execute(args: SaveArgs, db: &Path) -> Result<(), Box<dyn Error>> {
    let mut store = super::open_store(db)?;
    let entry = store.save(&args.text)?;
    println!("✓ Saved {} ({})", entry.id, entry.created_at);
    Ok(())
}
