//! WordQuest - generative AI proxy for a kids learning app
//!
//! This library provides the server-side action proxy in front of the
//! Gemini API and a typed client that talks to it.

pub mod actions;
pub mod client;
pub mod config;
pub mod docs;
pub mod error;
pub mod provider;
pub mod routes;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

pub use crate::client::{ClientError, ProxyClient};
pub use crate::config::Config;
pub use crate::provider::{GeminiProvider, ModelProvider};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Model provider the actions are forwarded to
    pub provider: Arc<dyn ModelProvider>,
}

impl AppState {
    /// Create a new application state backed by the Gemini API
    pub fn new(config: Config) -> Result<Self> {
        // Initialize HTTP client with connection pooling
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(32)
            .build()?;

        let provider: Arc<dyn ModelProvider> = Arc::new(GeminiProvider::new(http_client, &config));

        Ok(Self::with_provider(config, provider))
    }

    /// Create application state around an existing provider
    pub fn with_provider(config: Config, provider: Arc<dyn ModelProvider>) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            provider,
        }
    }
}
