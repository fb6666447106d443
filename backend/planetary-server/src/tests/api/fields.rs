use crate::{ApiError, RequestFields};

use axum::{body::Body, extract::FromRequest};
use http::Request;

#[test]
fn test_blank_field_is_reported_by_name() {
    let fields = RequestFields::from_pairs([("email", "   ")]);

    match fields.text("email") {
        Err(ApiError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("email")),
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_missing_field_is_reported_by_name() {
    let fields = RequestFields::default();

    match fields.float("mass") {
        Err(ApiError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("mass")),
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_text_value_is_not_trimmed() {
    let fields = RequestFields::from_pairs([("password", " pass ")]);

    assert_eq!(fields.text("password").unwrap(), " pass ");
}

#[test]
fn test_numbers_parse_with_surrounding_whitespace() {
    let fields = RequestFields::from_pairs([("mass", " 5.972e24 "), ("planet_id", "3")]);

    assert_eq!(fields.float("mass").unwrap(), 5.972e24);
    assert_eq!(fields.integer("planet_id").unwrap(), 3);
}

#[test]
fn test_non_numeric_value_is_a_validation_error() {
    let fields = RequestFields::from_pairs([("radius", "big")]);

    assert!(matches!(
        fields.float("radius"),
        Err(ApiError::Validation { .. })
    ));
}

#[tokio::test]
async fn test_form_body_is_parsed() {
    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("email=foo%40bar.com&password=pass"))
        .unwrap();

    let fields = RequestFields::from_request(request, &()).await.unwrap();

    assert_eq!(fields.text("email").unwrap(), "foo@bar.com");
    assert_eq!(fields.text("password").unwrap(), "pass");
}

#[tokio::test]
async fn test_json_body_values_become_text() {
    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"email":"foo@bar.com","mass":12.5,"skip":null}"#))
        .unwrap();

    let fields = RequestFields::from_request(request, &()).await.unwrap();

    assert_eq!(fields.text("email").unwrap(), "foo@bar.com");
    assert_eq!(fields.float("mass").unwrap(), 12.5);
    assert!(fields.text("skip").is_err());
}

#[tokio::test]
async fn test_malformed_json_is_a_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let result = RequestFields::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[tokio::test]
async fn test_get_reads_query_string() {
    let request = Request::builder()
        .method("GET")
        .uri("/params?name=Ada&age=36")
        .body(Body::empty())
        .unwrap();

    let fields = RequestFields::from_request(request, &()).await.unwrap();

    assert_eq!(fields.text("name").unwrap(), "Ada");
    assert_eq!(fields.integer("age").unwrap(), 36);
}
