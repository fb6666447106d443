mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod mail_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use mail_config::MailConfig;
pub use server_config::ServerConfig;

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "PLANETARY_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".planetary";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "planets.db";

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_TOKEN_TTL_SECS: u64 = 900;
const MIN_TOKEN_TTL_SECS: u64 = 60;
const MAX_TOKEN_TTL_SECS: u64 = 86_400;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_MAIL_SERVER: &str = "smtp.mailtrap.io";
const DEFAULT_MAIL_PORT: u16 = 2525;
const DEFAULT_MAIL_SENDER: &str = "admin@api.com";

#[cfg(test)]
mod tests;
