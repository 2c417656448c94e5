//! Configuration management for WordQuest
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Default upstream base URL for the Gemini REST API
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Read a variable, treating blank values as unset
fn non_blank_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Gemini API base URL
    pub gemini_api_url: String,
    /// Gemini API key. Actions are rejected while this is unset.
    pub gemini_api_key: Option<String>,

    /// Model used for JSON-shaped text actions (identify, lookup, story)
    pub text_model: String,
    /// Model used for speech synthesis
    pub speech_model: String,
    /// Model used for illustrations and stickers
    pub image_model: String,
    /// Prebuilt voice for speech synthesis
    pub voice_name: String,

    /// Maximum accepted request body, in bytes
    pub max_body_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("WORDQUEST_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("WORDQUEST_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("Invalid WORDQUEST_PORT")?,

            gemini_api_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string()),
            gemini_api_key: non_blank_var("GEMINI_API_KEY")
                .or_else(|| non_blank_var("API_KEY")),

            text_model: env::var("GEMINI_TEXT_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            speech_model: env::var("GEMINI_SPEECH_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash-preview-tts".to_string()),
            image_model: env::var("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash-image".to_string()),
            voice_name: env::var("GEMINI_VOICE_NAME").unwrap_or_else(|_| "Kore".to_string()),

            max_body_bytes: env::var("MAX_BODY_BYTES")
                .unwrap_or_else(|_| "10485760".to_string())
                .parse()
                .context("Invalid MAX_BODY_BYTES")?,
        })
    }

    /// Whether provider credentials are present
    pub fn has_credentials(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}
