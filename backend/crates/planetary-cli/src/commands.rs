use crate::db_commands::DbCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbCommands,
    },
}
