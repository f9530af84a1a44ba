//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests call `IntoResponse` directly on `AppError` values; no router
//! or database is involved.

use assert_matches::assert_matches;
use axum::body::Body;
use axum::extract::FromRequest;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use http_body_util::BodyExt;
use spacefleet_api::error::{AppError, ASTRONAUT_NOT_FOUND, NOT_FOUND, SPACECRAFT_NOT_FOUND};
use spacefleet_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: NotFound carries the route's label
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_returns_404_with_label() {
    for label in [NOT_FOUND, SPACECRAFT_NOT_FOUND, ASTRONAUT_NOT_FOUND] {
        let (status, json) = error_to_response(AppError::NotFound(label)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, serde_json::json!({ "message": label }));
    }
}

// ---------------------------------------------------------------------------
// Test: validation failures collapse into the generic 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_generic_500() {
    let err = AppError::from(CoreError::validation("mass", "must be at least 201"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "some error occured");
}

// ---------------------------------------------------------------------------
// Test: an unreadable body collapses into the generic 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn body_rejection_returns_generic_500() {
    let request = Request::builder()
        .header("content-type", "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();
    let rejection = Json::<serde_json::Value>::from_request(request, &())
        .await
        .unwrap_err();

    let err = AppError::from(rejection);
    assert_matches!(err, AppError::Body(_));

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "some error occured");
}

// ---------------------------------------------------------------------------
// Test: database errors hide their cause
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_message() {
    let err = AppError::from(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "message": "some error occured" }));
}

// ---------------------------------------------------------------------------
// Test: a failed listing has its own message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn listing_error_returns_server_error_message() {
    let err = AppError::Listing(sqlx::Error::ColumnNotFound("color".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "message": "Server error" }));
}
