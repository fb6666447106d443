use crate::ApiError;

use planetary_auth::AuthError;
use planetary_core::NewPlanet;
use planetary_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "That planet does not exist".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "That planet does not exist");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "mass must be a number".into(),
        field: Some("mass".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "mass");
}

#[tokio::test]
async fn test_conflict_returns_409() {
    let error = ApiError::Conflict {
        message: "That email already exists!".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["message"], "That email already exists!");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let error = ApiError::Unauthorized {
        message: "Bad email or password. Try again.".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[test]
fn test_core_validation_error_converts_with_field() {
    let core_err = NewPlanet::new("", "Class M", "Sol", 1.0, 1.0, 1.0).unwrap_err();
    let api_err: ApiError = core_err.into();

    match api_err {
        ApiError::Validation { field, .. } => {
            assert_eq!(field.as_deref(), Some("planet_name"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_unique_violation_converts_to_conflict() {
    let db_err = DbError::UniqueViolation {
        constraint: "users.email".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    assert_eq!(api_err.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_unique_violation_does_not_reveal_constraint() {
    let db_err = DbError::UniqueViolation {
        constraint: "planets.planet_name".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(db_err.into()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "That record already exists");
    assert!(!json.to_string().contains("planet_name"));
}

#[test]
fn test_other_db_errors_hide_details() {
    let db_err = DbError::Migration {
        message: "checksum mismatch in 20261019000001".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    match api_err {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Database operation failed");
        }
        _ => panic!("Expected Internal error"),
    }
}

#[test]
fn test_token_errors_convert_to_unauthorized() {
    let auth_err = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = auth_err.into();

    assert_eq!(api_err.status(), StatusCode::UNAUTHORIZED);
}
