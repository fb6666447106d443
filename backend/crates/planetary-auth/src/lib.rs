pub mod bearer_token;
pub mod claims;
pub mod error;
pub mod jwt_issuer;
pub mod jwt_validator;

pub use bearer_token::parse_bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_issuer::JwtIssuer;
pub use jwt_validator::JwtValidator;
