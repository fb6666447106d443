use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
}
