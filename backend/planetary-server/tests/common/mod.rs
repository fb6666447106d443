#![allow(dead_code)]

//! Test infrastructure for planetary-server API tests

use planetary_core::{NewPlanet, NewUser, Planet, User};
use planetary_db::{PlanetRepository, UserRepository};
use planetary_mail::{Mailer, OutgoingMail};
use planetary_server::AppState;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Mailer that keeps every message instead of sending it
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingMail>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, mail: &OutgoingMail) -> planetary_mail::Result<()> {
        self.sent.lock().unwrap().push(mail.clone());
        Ok(())
    }
}

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = planetary_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    planetary_db::create_schema(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing, with the mailer it records into
pub async fn create_test_app_state() -> (AppState, Arc<RecordingMailer>) {
    let pool = create_test_pool().await;
    let mailer = Arc::new(RecordingMailer::default());

    let state = AppState::new(
        pool,
        TEST_SECRET,
        Duration::from_secs(900),
        mailer.clone(),
    );

    (state, mailer)
}

/// Create a test user with password "secret"
pub async fn create_test_user(pool: &SqlitePool, email: &str) -> User {
    let new_user = NewUser::new(email, "Mallory", "Culbert", "secret").unwrap();
    UserRepository::new(pool.clone())
        .create(&new_user)
        .await
        .expect("Failed to create test user")
}

/// Create a test planet
pub async fn create_test_planet(pool: &SqlitePool, name: &str) -> Planet {
    let new_planet = NewPlanet::new(name, "Class M", "Sol", 5.972e24, 3959.0, 92.96e6).unwrap();
    PlanetRepository::new(pool.clone())
        .create(&new_planet)
        .await
        .expect("Failed to create test planet")
}

/// Bearer token for `email`, signed like the server signs them
pub fn bearer_token(state: &AppState, email: &str) -> String {
    format!("Bearer {}", state.jwt_issuer.issue(email).unwrap())
}

/// Urlencoded form request, optionally authenticated
pub fn form_request(method: &str, uri: &str, body: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded");

    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

/// Bodyless request, optionally authenticated
pub fn empty_request(method: &str, uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }

    builder.body(Body::empty()).unwrap()
}

/// Run one request and decode the JSON response
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap();

    (status, json)
}
