#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use menu_service::config::{MenuConfig, MongoConfig};
use menu_service::services::MockMenuStore;
use menu_service::startup::Application;
use menu_service::{build_router, AppState};
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use tower::util::ServiceExt;

pub fn test_config() -> MenuConfig {
    MenuConfig {
        common: CoreConfig { port: 0 },
        service_name: "menu-service".to_string(),
        log_level: "error".to_string(),
        otlp_endpoint: None,
        mongodb: MongoConfig {
            uri: std::env::var("TEST_MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: Some(format!("menu_test_{}", uuid::Uuid::new_v4())),
        },
    }
}

/// Router wired to an in-memory store, plus a handle on that store for seeding
/// and inspection.
pub struct TestRouter {
    pub router: Router,
    pub store: Arc<MockMenuStore>,
}

impl TestRouter {
    pub fn new() -> Self {
        let store = Arc::new(MockMenuStore::new());
        let router = build_router(AppState::new(store.clone()));
        Self { router, store }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    pub async fn put_json(&self, id: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::builder()
                .method("PUT")
                .uri(format!("/menu/{}", id))
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn delete(&self, id: &str) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(format!("/menu/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }
}

/// A running server on a random port backed by an in-memory store.
pub struct TestApp {
    pub address: String,
    pub store: Arc<MockMenuStore>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let store = Arc::new(MockMenuStore::new());
        let app = Application::build_with_store(test_config(), store.clone())
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, store }
    }
}
