//! Common test utilities for API testing with mocks.
//!
//! This module provides a test fixture that creates an in-process router
//! with a mock catalog gateway injected, enabling comprehensive API
//! testing without external infrastructure.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use marquee_core::testing::MockCatalog;
use marquee_core::{load_config_from_str, CatalogGateway, Discovery};
use marquee_server::api::create_router;
use marquee_server::state::AppState;

/// Re-export fixtures for test convenience
pub use marquee_core::testing::fixtures;

/// Test fixture for API testing with a mock catalog.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock catalog - configure pages, videos, genres, details
    pub catalog: Arc<MockCatalog>,
}

/// A decoded test response.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a fixture with default test configuration.
    pub fn new() -> Self {
        Self::with_config(
            r#"
[catalog]
api_key = "test-key"
"#,
        )
    }

    /// Create a fixture from a TOML config string.
    pub fn with_config(toml: &str) -> Self {
        let config = load_config_from_str(toml).expect("invalid test config");

        let catalog = Arc::new(MockCatalog::new());
        let gateway: Arc<dyn CatalogGateway> = catalog.clone();
        let discovery = Discovery::new(gateway, config.discovery.clone());

        let state = Arc::new(AppState::new(config, discovery, None));
        let router = create_router(state);

        Self { router, catalog }
    }

    /// Execute a GET request and decode the JSON response.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("invalid test request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body read failed")
            .to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}
