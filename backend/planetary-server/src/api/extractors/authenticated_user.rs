//! Axum extractor for bearer-token authentication

use crate::{ApiError, AppState};

use planetary_auth::parse_bearer_token;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Caller identity taken from a valid `Authorization: Bearer` token.
///
/// Rejects with 401 when the header is missing, uses another scheme, or the
/// token fails verification.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub email: String,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let token = parse_bearer_token(header)?;
            let claims = state.jwt_validator.validate(token)?;

            log::debug!("Authenticated request for {}", claims.sub);

            Ok(AuthenticatedUser { email: claims.sub })
        }
    }
}
