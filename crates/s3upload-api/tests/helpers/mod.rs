//! Test helpers: build AppState and router for integration tests.
//!
//! Run with: `cargo test -p s3upload-api --test upload_test`

#![allow(dead_code)]

pub mod fixtures;
pub mod storage;

use axum_test::TestServer;
use s3upload_api::setup::routes;
use s3upload_api::AppState;
use s3upload_core::{Config, S3Config};
use std::sync::Arc;

pub use storage::{Behavior, RecordingStorage};

pub const TEST_BUCKET: &str = "test-bucket";

/// Test application: server plus a handle on the fake storage behind it.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<RecordingStorage>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn create_test_config() -> Config {
    Config::new(S3Config {
        endpoint: "http://localhost:9000".to_string(),
        bucket: TEST_BUCKET.to_string(),
        access_key: "test-access-key".to_string(),
        secret_key: "test-secret-key".to_string(),
        path_style: true,
        timeout_secs: None,
    })
    .expect("Failed to build test config")
}

/// Setup test app whose storage behaves as requested.
pub fn setup_test_app(behavior: Behavior) -> TestApp {
    let storage = Arc::new(RecordingStorage::new(behavior));
    let state = Arc::new(AppState::new(create_test_config(), storage.clone()));
    let router = routes::setup_routes(state);
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp { server, storage }
}
