//! Tripjot CLI
//!
//! Command-line surface over the preference store

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tripjot_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "tripjot")]
#[command(about = "Tripjot - jot and keep travel preferences", long_about = None)]
struct Cli {
    /// Database file backing the preference store
    #[arg(long, global = true, default_value = ".tripjot/prefs.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Save a new preference entry
    Save(commands::save::SaveArgs),
    /// List saved entries, newest first
    List(commands::list::ListArgs),
    /// Print a saved entry's text for resubmission
    Load(commands::load::LoadArgs),
    /// Delete one entry
    Remove(commands::remove::RemoveArgs),
    /// Delete every entry
    Clear(commands::clear::ClearArgs),
    /// Edit interactively with a draft buffer
    Edit(commands::edit::EditArgs),
}

fn main() {
    logging_facility::init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Save(args) => commands::save::execute(args, &cli.db),
        Commands::List(args) => commands::list::execute(args, &cli.db),
        Commands::Load(args) => commands::load::execute(args, &cli.db),
        Commands::Remove(args) => commands::remove::execute(args, &cli.db),
        Commands::Clear(args) => commands::clear::execute(args, &cli.db),
        Commands::Edit(args) => commands::edit::execute(args, &cli.db),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
