use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::JwtEncode { .. } => "JWT_ENCODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
        }
    }

    /// Client-facing message, without source location or key material
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidToken { message, .. } => format!("Invalid token: {}", message),
            Self::TokenExpired { .. } => "Token has expired".to_string(),
            Self::MissingHeader { .. } => "Missing Authorization Header".to_string(),
            Self::InvalidScheme { .. } => {
                "Authorization header must use the Bearer scheme".to_string()
            }
            Self::JwtDecode { .. } => "Token could not be verified".to_string(),
            Self::JwtEncode { .. } => "Token could not be issued".to_string(),
            Self::InvalidClaim { claim, message, .. } => {
                format!("Invalid claim '{}': {}", claim, message)
            }
        }
    }

    /// True when the failure is the client's fault (bad or missing credentials)
    pub fn is_unauthorized(&self) -> bool {
        !matches!(self, Self::JwtEncode { .. })
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
