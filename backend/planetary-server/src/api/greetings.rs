//! Greeting and age-gate handlers

use crate::{ApiResult, MessageResponse, RequestFields, api::fields::parse_integer};

use planetary_core::AgeCheck;

use axum::{Json, extract::Path, http::StatusCode};

/// GET /
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from Planetary API"))
}

/// GET /not_found, and any unrouted path
pub async fn not_found() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::new("That resource was not found.")),
    )
}

/// GET /params?name=..&age=..
pub async fn params(fields: RequestFields) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let name = fields.text("name")?;
    let age = fields.integer("age")?;

    Ok(age_gate(name, age))
}

/// GET /url_variables/{name}/{age}
pub async fn url_variables(
    Path((name, age)): Path<(String, String)>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let age = parse_integer("age", &age)?;

    Ok(age_gate(&name, age))
}

fn age_gate(name: &str, age: i64) -> (StatusCode, Json<MessageResponse>) {
    let check = AgeCheck::for_age(age);
    let status = if check.is_welcome() {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };

    (status, Json(MessageResponse::new(check.message(name))))
}
