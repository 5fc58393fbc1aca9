use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "roster", about = concat!("roster v", env!("CARGO_PKG_VERSION"), " - browse and edit a bundled roster of people"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Load records from a JSON file instead of the bundled data
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Path to a roster.toml config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all records
    List,
    /// List records whose first name contains a term
    Search(SearchArgs),
    /// Show one record in full
    Show(ShowArgs),
}

#[derive(Args)]
pub struct SearchArgs {
    /// Case-insensitive substring matched against first names
    pub term: String,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Record id
    pub id: String,
}
