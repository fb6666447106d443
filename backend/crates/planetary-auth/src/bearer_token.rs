use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the token from an `Authorization` header value
#[track_caller]
pub fn parse_bearer_token(header: Option<&str>) -> AuthErrorResult<&str> {
    let header = header.ok_or_else(|| AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    })?;

    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })?
        .trim();

    if token.is_empty() {
        return Err(AuthError::InvalidToken {
            message: "empty bearer token".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token)
}
