use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Longest subject accepted (RFC 5321 path limit)
const MAX_SUBJECT_LENGTH: usize = 254;

/// JWT Claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the user's email)
    pub sub: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Not valid before timestamp (Unix)
    pub nbf: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl Claims {
    /// Claims for `subject`, valid from `issued_at` for `ttl`
    pub fn for_subject(subject: &str, issued_at: i64, ttl: Duration) -> Self {
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        Self {
            sub: subject.to_string(),
            iat: issued_at,
            nbf: issued_at,
            exp: issued_at.saturating_add(ttl_secs),
        }
    }

    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.trim().is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (email) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.sub.len() > MAX_SUBJECT_LENGTH {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
