use crate::{ApiError, RequestFields};

use planetary_core::NewUser;

use std::panic::Location;

use error_location::ErrorLocation;

/// Form fields of `POST /register`
#[derive(Debug)]
pub struct RegisterRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl TryFrom<&RequestFields> for RegisterRequest {
    type Error = ApiError;

    fn try_from(fields: &RequestFields) -> Result<Self, Self::Error> {
        Ok(Self {
            email: fields.text("email")?.to_string(),
            first_name: fields.text("first_name")?.to_string(),
            last_name: fields.text("last_name")?.to_string(),
            password: fields.text("password")?.to_string(),
        })
    }
}

impl TryFrom<RegisterRequest> for NewUser {
    type Error = ApiError;

    /// The email must parse as a bare mail address (no display name)
    fn try_from(req: RegisterRequest) -> Result<Self, Self::Error> {
        let email = req.email.trim();
        if let Err(e) = planetary_mail::parse_address(email) {
            log::debug!("Registration refused: {}", e);
            return Err(ApiError::Validation {
                message: format!("'{}' is not an email address", email),
                field: Some("email".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(NewUser::new(
            &req.email,
            &req.first_name,
            &req.last_name,
            &req.password,
        )?)
    }
}
