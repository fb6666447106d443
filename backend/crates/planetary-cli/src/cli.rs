use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "planetary")]
#[command(about = "Planetary API maintenance commands")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// SQLite file to operate on (defaults to the configured database)
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,
}
