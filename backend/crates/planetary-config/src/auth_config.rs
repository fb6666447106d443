use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS,
    MIN_JWT_SECRET_LENGTH, MIN_TOKEN_TTL_SECS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: Option<String>,
    /// Access token lifetime
    pub token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self.jwt_secret.as_deref().ok_or_else(|| {
            ConfigError::auth("auth.jwt_secret is required (set PLANETARY_AUTH_JWT_SECRET)")
        })?;

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if !(MIN_TOKEN_TTL_SECS..=MAX_TOKEN_TTL_SECS).contains(&self.token_ttl_secs) {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_secs must be {}-{}, got {}",
                MIN_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, self.token_ttl_secs
            )));
        }

        Ok(())
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }
}
