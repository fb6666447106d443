use planetary_auth::{JwtIssuer, JwtValidator};
use planetary_mail::Mailer;

use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_issuer: Arc<JwtIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        jwt_secret: &[u8],
        token_ttl: Duration,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            pool,
            jwt_issuer: Arc::new(JwtIssuer::with_hs256(jwt_secret, token_ttl)),
            jwt_validator: Arc::new(JwtValidator::with_hs256(jwt_secret)),
            mailer,
        }
    }
}
