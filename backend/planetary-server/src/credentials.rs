//! Login: credential check against the store, then token issuance.

use crate::{ApiError, ApiResult, AppState};

use planetary_auth::JwtIssuer;
use planetary_db::UserRepository;

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{info, warn};

pub const BAD_CREDENTIALS: &str = "Bad email or password. Try again.";

pub struct CredentialService {
    users: UserRepository,
    issuer: Arc<JwtIssuer>,
}

impl CredentialService {
    pub fn new(state: &AppState) -> Self {
        Self {
            users: UserRepository::new(state.pool.clone()),
            issuer: Arc::clone(&state.jwt_issuer),
        }
    }

    /// Issue an access token when `email` and `password` match a stored user
    pub async fn authenticate(&self, email: &str, password: &str) -> ApiResult<String> {
        let Some(user) = self.users.find_by_credentials(email, password).await? else {
            warn!("Login refused for {}", email);
            return Err(ApiError::Unauthorized {
                message: BAD_CREDENTIALS.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let token = self.issuer.issue(&user.email)?;
        info!("Issued access token for user {}", user.user_id);

        Ok(token)
    }
}
