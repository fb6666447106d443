use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Registration draft - a user before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    /// Build a draft, trimming names and email.
    ///
    /// The password is kept byte-for-byte; only an empty password is refused.
    #[track_caller]
    pub fn new(
        email: &str,
        first_name: &str,
        last_name: &str,
        password: &str,
    ) -> CoreErrorResult<Self> {
        let email = email.trim();
        if !email.contains('@') {
            return Err(CoreError::Validation {
                field: "email",
                message: format!("'{}' is not an email address", email),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if password.is_empty() {
            return Err(CoreError::Validation {
                field: "password",
                message: "password cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}
