use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] planetary_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] planetary_db::DbError),

    #[error("Mail setup error: {0}")]
    Mail(#[from] planetary_mail::MailError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
