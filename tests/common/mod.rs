//! Common test utilities for WordQuest
//!
//! Shared configuration builders and server helpers used by the integration
//! tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use wordquest::{routes, AppState, Config};

use crate::mocks::gemini::{IMAGE_MODEL, SPEECH_MODEL, TEST_GEMINI_API_KEY, TEXT_MODEL};

/// Config pointing at `gemini_url` with the test API key
pub fn test_config(gemini_url: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        gemini_api_url: gemini_url.to_string(),
        gemini_api_key: Some(TEST_GEMINI_API_KEY.to_string()),
        text_model: TEXT_MODEL.to_string(),
        speech_model: SPEECH_MODEL.to_string(),
        image_model: IMAGE_MODEL.to_string(),
        voice_name: "Kore".to_string(),
        max_body_bytes: 10 * 1024 * 1024,
    }
}

/// Config with no API key
pub fn config_without_credentials(gemini_url: &str) -> Config {
    Config {
        gemini_api_key: None,
        ..test_config(gemini_url)
    }
}

/// In-process test server around the full router
pub fn test_server(config: Config) -> TestServer {
    let state = Arc::new(AppState::new(config).expect("Failed to create app state"));
    TestServer::new(routes::create_router(state)).expect("Failed to create test server")
}

/// Serve the full router on an ephemeral port and return its base URL
pub async fn spawn_proxy(config: Config) -> String {
    let state = Arc::new(AppState::new(config).expect("Failed to create app state"));
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    format!("http://{}", addr)
}
