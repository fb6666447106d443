//! User REST API handlers: registration, login, password recovery

use crate::{
    ApiError, ApiResult, AppState, CredentialService, LoginRequest, LoginResponse,
    MessageResponse, RegisterRequest, RequestFields,
};

use planetary_core::NewUser;
use planetary_db::{DbError, UserRepository};
use planetary_mail::OutgoingMail;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use log::{info, warn};

const EMAIL_TAKEN: &str = "That email already exists!";

// =============================================================================
// Handlers
// =============================================================================

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    fields: RequestFields,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let new_user = NewUser::try_from(RegisterRequest::try_from(&fields)?)?;

    let repo = UserRepository::new(state.pool.clone());
    if repo.find_by_email(&new_user.email).await?.is_some() {
        return Err(email_taken());
    }

    // A concurrent registration can still win the race; the unique index decides.
    let user = repo.create(&new_user).await.map_err(|e| match e {
        DbError::UniqueViolation { .. } => email_taken(),
        other => ApiError::from(other),
    })?;
    info!("Registered user {}", user.user_id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully.")),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    fields: RequestFields,
) -> ApiResult<Json<LoginResponse>> {
    let request = LoginRequest::try_from(&fields)?;

    let access_token = CredentialService::new(&state)
        .authenticate(&request.email, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login succeeded!".to_string(),
        access_token,
    }))
}

/// GET /retrieve_password/{email}
///
/// Mails the stored password to the account address.
pub async fn retrieve_password(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let Some(user) = repo.find_by_email(&email).await? else {
        warn!("Password retrieval for unknown address {}", email);
        return Err(ApiError::Unauthorized {
            message: "That email doesn't exist".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let mail = OutgoingMail::new(
        user.email.clone(),
        format!("Your PlanetaryAPI password is {}", user.password),
        "",
    );
    state.mailer.send(&mail).await?;
    info!("Password mail sent for user {}", user.user_id);

    Ok(Json(MessageResponse::new(format!(
        "Password sent to {}",
        user.email
    ))))
}

#[track_caller]
fn email_taken() -> ApiError {
    ApiError::Conflict {
        message: EMAIL_TAKEN.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
