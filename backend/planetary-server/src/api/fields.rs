//! Request field access for form and JSON bodies.
//!
//! Handlers that take user input read it through [`RequestFields`], which
//! accepts an urlencoded form (query string for GET) or a JSON object when
//! the request declares `Content-Type: application/json`.

use crate::ApiError;

use std::collections::HashMap;
use std::future::Future;
use std::panic::Location;

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use error_location::ErrorLocation;
use serde_json::{Map, Value};

#[derive(Debug, Default, Clone)]
pub struct RequestFields {
    values: HashMap<String, String>,
}

impl RequestFields {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    fn from_json(object: Map<String, Value>) -> Self {
        let values = object
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::Null => return None,
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                Some((key, text))
            })
            .collect();

        Self { values }
    }

    /// Required, non-blank text field. The value is returned untrimmed.
    #[track_caller]
    pub fn text(&self, field: &'static str) -> Result<&str, ApiError> {
        match self.values.get(field) {
            Some(value) if !value.trim().is_empty() => Ok(value.as_str()),
            _ => Err(missing_field(field)),
        }
    }

    /// Required floating-point field
    #[track_caller]
    pub fn float(&self, field: &'static str) -> Result<f64, ApiError> {
        let raw = self.text(field)?;
        raw.trim().parse::<f64>().map_err(|_| ApiError::Validation {
            message: format!("{} must be a number, got '{}'", field, raw),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Required integer field
    #[track_caller]
    pub fn integer(&self, field: &'static str) -> Result<i64, ApiError> {
        let raw = self.text(field)?;
        parse_integer(field, raw)
    }
}

/// Parse an integer path segment or field value
#[track_caller]
pub fn parse_integer(field: &'static str, raw: &str) -> Result<i64, ApiError> {
    raw.trim().parse::<i64>().map_err(|_| ApiError::Validation {
        message: format!("{} must be an integer, got '{}'", field, raw),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn missing_field(field: &'static str) -> ApiError {
    ApiError::Validation {
        message: format!("{} is required", field),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    }
}

impl<S> FromRequest<S> for RequestFields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let is_json = req
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .is_some_and(|value| value.starts_with("application/json"));

            if is_json {
                let Json(object) = Json::<Map<String, Value>>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::BadRequest {
                        message: e.body_text(),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
                Ok(Self::from_json(object))
            } else {
                let Form(values) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::BadRequest {
                        message: e.body_text(),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
                Ok(Self { values })
            }
        }
    }
}
