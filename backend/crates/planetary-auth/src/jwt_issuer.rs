use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Signs access tokens after a successful login
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    header: Header,
    ttl: Duration,
}

impl JwtIssuer {
    /// Create issuer with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
            ttl,
        }
    }

    /// Issue a token whose subject is `subject`, valid from now
    #[track_caller]
    pub fn issue(&self, subject: &str) -> AuthErrorResult<String> {
        let claims = Claims::for_subject(subject, chrono::Utc::now().timestamp(), self.ttl);
        self.issue_claims(&claims)
    }

    /// Sign an explicit set of claims
    #[track_caller]
    pub fn issue_claims(&self, claims: &Claims) -> AuthErrorResult<String> {
        encode(&self.header, claims, &self.encoding_key).map_err(|e| AuthError::JwtEncode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
