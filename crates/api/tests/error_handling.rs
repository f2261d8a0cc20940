//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no HTTP server
//! or store is involved.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use movies_api::error::AppError;
use movies_core::error::CoreError;
use movies_core::movie::validate_new_movie;
use movies_db::StoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404_naming_id() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Movie",
        id: "000000000000000000000000".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(
        json["message"],
        "Movie with ID 000000000000000000000000 not found"
    );
}

#[tokio::test]
async fn invalid_payload_returns_400_with_field_list() {
    let err = AppError::from(
        validate_new_movie(&serde_json::json!({"movie": "Dune"})).unwrap_err(),
    );
    assert_matches!(err, AppError::Core(CoreError::InvalidPayload(ref v)) if v.len() == 1);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["message"], "Validation failed: description is required");
    assert_eq!(json["fields"][0]["field"], "description");
    assert_eq!(json["fields"][0]["message"], "is required");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("Error creating new movie".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["message"], "Error creating new movie");
}

#[tokio::test]
async fn store_error_returns_500_and_sanitizes_message() {
    let err = AppError::Store(StoreError::Poisoned);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], "An internal error occurred");
    assert!(
        !json.to_string().contains("poisoned"),
        "Store error response must not leak internal details"
    );
}
