use crate::{AuthError, Claims, Result as AuthErrorResult};

use planetary_core::ErrorLocation;

use std::panic::Location;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Clock skew tolerance in seconds
const LEEWAY_SECS: u64 = 30;

/// Verifies bearer tokens presented to protected endpoints
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// HS256 with the shared server secret; `exp` and `sub` must be present
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = LEEWAY_SECS;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Decode `token`, check its signature and time window, then its claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let location = ErrorLocation::from(Location::caller());

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|source| match source.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired { location },
                _ => AuthError::JwtDecode { source, location },
            })?
            .claims;

        claims.validate()?;
        Ok(claims)
    }
}
