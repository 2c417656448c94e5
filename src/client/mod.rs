//! Typed client for the action endpoint
//!
//! Mirrors each action as an async method so callers never build the JSON
//! envelope or touch provider credentials. Photos are resized and stripped
//! of their data-URL prefix before upload.

pub mod image;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::{
    actions::{
        ActionRequest, IdentifyObjectRequest, IllustrationRequest, ImageResult, LearnedWord,
        LookupWordRequest, ObjectIdentification, SpeechRequest, SpeechResult, StickerRequest,
        Story, StoryRequest, Theme, WordLookup,
    },
    routes::ACTION_PATH,
};

use self::image::{clean_base64, resize_image, IDENTIFY_MAX_DIMENSION, STICKER_MAX_DIMENSION};

/// Client-side errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The proxy answered with a non-2xx status
    #[error("Server error: {status} {body}")]
    Server { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for client calls
pub type ClientResult<T> = Result<T, ClientError>;

/// Client for a running proxy
#[derive(Debug, Clone)]
pub struct ProxyClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ProxyClient {
    /// Create a client for the proxy at `base_url` (e.g. `http://localhost:3000`)
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing HTTP client
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), ACTION_PATH),
        }
    }

    /// Full URL of the action endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn call<R: DeserializeOwned>(&self, request: &ActionRequest) -> ClientResult<R> {
        debug!(action = request.kind().as_str(), "Calling proxy");

        let response = self.http.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Speak `text`; returns base64 audio
    ///
    /// Blank text returns `None` without a request.
    pub async fn generate_speech(&self, text: &str) -> ClientResult<Option<String>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let request = ActionRequest::GenerateSpeech(SpeechRequest {
            text: text.to_string(),
        });
        let result: Option<SpeechResult> = self.call(&request).await?;
        Ok(result.and_then(|speech| speech.audio_base64))
    }

    /// Identify the object in a photo (data URL or bare base64)
    pub async fn identify_object(
        &self,
        image_base64: &str,
        theme: Option<&Theme>,
    ) -> ClientResult<ObjectIdentification> {
        let resized = resize_image(image_base64, IDENTIFY_MAX_DIMENSION);

        let request = ActionRequest::IdentifyObject(IdentifyObjectRequest {
            image_base64: clean_base64(&resized).into_owned(),
            theme: theme.cloned(),
        });
        self.call(&request).await
    }

    /// Child-friendly explanation of `word` as used in `context`
    pub async fn lookup_word_definition(
        &self,
        word: &str,
        context: &str,
        age_group: &str,
    ) -> ClientResult<WordLookup> {
        let request = ActionRequest::LookupWord(LookupWordRequest {
            word: word.to_string(),
            context: context.to_string(),
            age_group: age_group.to_string(),
        });
        self.call(&request).await
    }

    /// Short story using the collected words
    pub async fn generate_story_content(
        &self,
        items: &[LearnedWord],
        theme: &Theme,
        kid_profile: &Value,
        user_prompt: Option<&str>,
    ) -> ClientResult<Story> {
        let request = ActionRequest::GenerateStory(StoryRequest {
            items: items.to_vec(),
            theme: Some(theme.clone()),
            kid_profile: Some(kid_profile.clone()),
            user_prompt: user_prompt.map(str::to_string),
        });
        self.call(&request).await
    }

    /// Story page illustration; returns a data URL
    pub async fn generate_illustration(
        &self,
        prompt: &str,
        style: &str,
        character_visual: &str,
    ) -> ClientResult<Option<String>> {
        let request = ActionRequest::GenerateIllustration(IllustrationRequest {
            prompt: prompt.to_string(),
            style: style.to_string(),
            character_visual: character_visual.to_string(),
        });
        let result: Option<ImageResult> = self.call(&request).await?;
        Ok(result.and_then(|image| image.image_base64))
    }

    /// Die-cut sticker of `word` cut out of a photo; returns a data URL
    pub async fn generate_sticker(
        &self,
        image_base64: &str,
        word: &str,
    ) -> ClientResult<Option<String>> {
        let resized = resize_image(image_base64, STICKER_MAX_DIMENSION);

        let request = ActionRequest::GenerateSticker(StickerRequest {
            image_base64: clean_base64(&resized).into_owned(),
            word: word.to_string(),
        });
        let result: Option<ImageResult> = self.call(&request).await?;
        Ok(result.and_then(|image| image.image_base64))
    }
}
