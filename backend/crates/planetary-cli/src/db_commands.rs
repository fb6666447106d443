use crate::Result as CliErrorResult;

use clap::Subcommand;
use sqlx::SqlitePool;

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbCommands {
    /// Create the planets and users tables
    Create,
    /// Drop all tables
    Drop,
    /// Insert the sample planets and test user
    Seed,
}

impl DbCommands {
    /// Only `create` may bring a new database file into existence
    pub fn creates_database(&self) -> bool {
        matches!(self, DbCommands::Create)
    }
}

/// Run `action` against `pool` and return the line to print
pub async fn execute(action: DbCommands, pool: &SqlitePool) -> CliErrorResult<String> {
    match action {
        DbCommands::Create => {
            planetary_db::create_schema(pool).await?;
            Ok("Database created".to_string())
        }
        DbCommands::Drop => {
            planetary_db::drop_schema(pool).await?;
            Ok("Database destroyed".to_string())
        }
        DbCommands::Seed => {
            let report = planetary_db::seed(pool).await?;
            let mut line = "Database seeded".to_string();
            let skipped = report.planets_skipped + report.users_skipped;
            if skipped > 0 {
                line.push_str(&format!(" ({} existing records skipped)", skipped));
            }
            Ok(line)
        }
    }
}
