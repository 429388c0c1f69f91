//! Shared fixtures for integration tests

use std::sync::Arc;

use axum::{body::Body, http::Request, Router};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use filmoteka_server::{
    api,
    config::{AuthConfig, DatabaseConfig},
    repository::{self, Repository},
    services::Services,
    AppState,
};

/// `Admin:Admin`
pub const ADMIN_AUTH: &str = "Basic QWRtaW46QWRtaW4=";
/// `User:User`
pub const USER_AUTH: &str = "Basic VXNlcjpVc2Vy";
/// `Admin:wrong`
pub const BAD_PASSWORD_AUTH: &str = "Basic QWRtaW46d3Jvbmc=";

fn memory_database() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    }
}

/// Fresh, migrated in-memory repository
pub async fn test_repository() -> Repository {
    let pool = repository::connect(&memory_database())
        .await
        .expect("in-memory database");
    repository::migrate(&pool).await.expect("migrations");
    Repository::new(pool)
}

/// Router over a fresh in-memory database with the default accounts
pub async fn test_app() -> Router {
    let services = Services::new(test_repository().await, AuthConfig::default())
        .await
        .expect("services");

    api::create_router(AppState {
        services: Arc::new(services),
    })
}

/// Send one request, returning the status and the JSON body (Null if empty)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    auth: Option<&str>,
    body: Option<Value>,
) -> (u16, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header("Authorization", auth);
    }

    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (u16, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
