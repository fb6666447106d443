//! planetary-cli library
//!
//! Database maintenance commands, exported for the binary and for tests.

pub mod cli;
pub mod commands;
pub mod db_commands;
pub mod error;


pub use cli::Cli;
pub use commands::Commands;
pub use db_commands::{DbCommands, execute};
pub use error::{CliError, Result};
