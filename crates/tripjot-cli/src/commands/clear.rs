//! Clear command
//!
//! Usage: tripjot clear

use clap::Args;
use std::error::Error;
use std::path::Path;

#[derive(Debug, Args)]
pub struct ClearArgs {}

/// Execute clear command
pub fn execute(_args: ClearArgs, db: &Path) -> Result<(), Box<dyn Error>> {
    let mut store = super::open_store(db)?;
    store.remove_all()?;
    println!("✓ Cleared all saved preferences");
    Ok(())
}
