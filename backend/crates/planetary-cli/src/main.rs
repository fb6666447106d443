//! planetary - Planetary API maintenance CLI
//!
//! # Examples
//!
//! ```bash
//! planetary db create
//! planetary db seed
//! planetary db drop --database ./scratch.db
//! ```

use planetary_cli::{Cli, CliError, Commands, execute};

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let Commands::Db { action } = cli.command;

    let database_path = match cli.database {
        Some(path) => path,
        None => configured_database_path()?,
    };

    let pool = planetary_db::connect(&database_path, action.creates_database()).await?;
    let result = execute(action, &pool).await;
    pool.close().await;

    result
}

fn configured_database_path() -> Result<PathBuf, CliError> {
    let config = planetary_config::Config::load()?;
    config.database.validate()?;
    Ok(config.database_path()?)
}
