use crate::{ApiError, RequestFields};

/// `POST /login` credentials, from a JSON body or a form
#[derive(Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl TryFrom<&RequestFields> for LoginRequest {
    type Error = ApiError;

    fn try_from(fields: &RequestFields) -> Result<Self, Self::Error> {
        Ok(Self {
            email: fields.text("email")?.trim().to_string(),
            password: fields.text("password")?.to_string(),
        })
    }
}
