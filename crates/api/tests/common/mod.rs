#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use movies_api::config::ServerConfig;
use movies_api::router::build_app_router;
use movies_api::state::AppState;
use movies_core::movie::{MovieChanges, NewMovie};
use movies_db::models::movie::Movie;
use movies_db::repositories::MovieStore;
use movies_db::StoreError;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over `store`, with the same middleware
/// stack production uses.
pub fn build_test_app(store: Arc<dyn MovieStore>) -> Router {
    build_app_router(AppState { store }, &test_config())
}

/// A store whose every operation fails, for exercising the 5xx paths.
pub struct FailingStore;

#[async_trait]
impl MovieStore for FailingStore {
    async fn insert(&self, _input: &NewMovie) -> Result<Movie, StoreError> {
        Err(StoreError::Poisoned)
    }

    async fn find_all(&self, _limit: Option<u64>) -> Result<Vec<Movie>, StoreError> {
        Err(StoreError::Poisoned)
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Movie>, StoreError> {
        Err(StoreError::Poisoned)
    }

    async fn update_by_id(
        &self,
        _id: &str,
        _changes: &MovieChanges,
    ) -> Result<Option<Movie>, StoreError> {
        Err(StoreError::Poisoned)
    }

    async fn delete_by_id(&self, _id: &str) -> Result<bool, StoreError> {
        Err(StoreError::Poisoned)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Poisoned)
    }
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body)),
        None => builder.body(Body::empty()),
    }
    .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body.to_string())).await
}

/// Read and parse a JSON response body.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
