use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Invalid mail address '{address}': {source} {location}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
        location: ErrorLocation,
    },

    #[error("Failed to build message: {source} {location}")]
    Build {
        #[source]
        source: lettre::error::Error,
        location: ErrorLocation,
    },

    #[error("SMTP transport error: {source} {location}")]
    Transport {
        #[source]
        source: lettre::transport::smtp::Error,
        location: ErrorLocation,
    },

    #[error("Mail configuration error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, MailError>;
