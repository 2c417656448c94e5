//! Gemini REST client
//!
//! Sends `generateContent` requests to the Gemini API using the server-side
//! API key.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, instrument};

use super::{
    types::{GenerateContentRequest, GenerateContentResponse},
    ModelProvider,
};
use crate::{
    config::Config,
    error::{AppError, AppResult},
};

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini API client
pub struct GeminiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

/// Error envelope returned by the Gemini API
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}

impl GeminiProvider {
    /// Create a new Gemini client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.gemini_api_url.trim_end_matches('/').to_string(),
            api_key: config.gemini_api_key.clone(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

/// Prefer the API's own message over the raw body when it has one
fn upstream_message(status: reqwest::StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
        .filter(|message| !message.is_empty());

    match detail {
        Some(message) => format!("Gemini API error {}: {}", status, message),
        None => format!("Gemini API error {}: {}", status, body),
    }
}

#[async_trait]
impl ModelProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    #[instrument(skip(self, request))]
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> AppResult<GenerateContentResponse> {
        let api_key = self.api_key.as_ref().ok_or(AppError::MissingCredentials)?;

        let url = self.endpoint(model);
        debug!(url = %url, contents = request.contents.len(), "Sending request to Gemini");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Failed to send request to Gemini");
                e
            })?;

        let status = response.status();
        debug!(url = %url, status = %status, "Received response from Gemini");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(upstream_message(status, &text)));
        }

        let result = response.json().await?;
        Ok(result)
    }
}
