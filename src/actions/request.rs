//! Action request types
//!
//! The endpoint accepts `{ "action": "<name>", ...fields }`. Each action is a
//! variant of [`ActionRequest`] carrying its own payload struct. Payload fields
//! are all optional on the wire; absent or `null` fields fall back to empty.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Deserialize `null` as the type's default
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Scavenger-hunt theme chosen in the app
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "colors")]
    pub id: Option<String>,
    #[schema(example = "Find something red")]
    pub label: Option<String>,
    #[schema(example = "The object must be mostly red")]
    pub description: Option<String>,
}

/// A word the child has already collected
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct LearnedWord {
    #[serde(deserialize_with = "nullable")]
    #[schema(example = "apple")]
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_detail: Option<String>,
}

impl LearnedWord {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Default::default()
        }
    }
}

/// `generateSpeech` payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SpeechRequest {
    #[serde(deserialize_with = "nullable")]
    #[schema(example = "Apple! A round, crunchy fruit.")]
    pub text: String,
}

/// `identifyObject` payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct IdentifyObjectRequest {
    /// Base64 JPEG without a data-URL prefix
    #[serde(deserialize_with = "nullable")]
    pub image_base64: String,
    pub theme: Option<Theme>,
}

/// `lookupWord` payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct LookupWordRequest {
    #[serde(deserialize_with = "nullable")]
    #[schema(example = "crunchy")]
    pub word: String,
    #[serde(deserialize_with = "nullable")]
    #[schema(example = "The apple was crunchy.")]
    pub context: String,
    #[serde(deserialize_with = "nullable")]
    #[schema(example = "4-6")]
    pub age_group: String,
}

/// `generateStory` payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct StoryRequest {
    #[serde(deserialize_with = "nullable")]
    pub items: Vec<LearnedWord>,
    pub theme: Option<Theme>,
    /// Free-form child profile, echoed into the prompt as JSON
    #[schema(value_type = Object)]
    pub kid_profile: Option<Value>,
    pub user_prompt: Option<String>,
}

/// `generateIllustration` payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct IllustrationRequest {
    #[serde(deserialize_with = "nullable")]
    #[schema(example = "The fox finds a red apple")]
    pub prompt: String,
    #[serde(deserialize_with = "nullable")]
    #[schema(example = "watercolor")]
    pub style: String,
    #[serde(deserialize_with = "nullable")]
    #[schema(example = "A small orange fox with a blue scarf")]
    pub character_visual: String,
}

/// `generateSticker` payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct StickerRequest {
    /// Base64 JPEG without a data-URL prefix
    #[serde(deserialize_with = "nullable")]
    pub image_base64: String,
    #[serde(deserialize_with = "nullable")]
    #[schema(example = "apple")]
    pub word: String,
}

/// Discriminant of [`ActionRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    GenerateSpeech,
    IdentifyObject,
    LookupWord,
    GenerateStory,
    GenerateIllustration,
    GenerateSticker,
}

impl ActionKind {
    pub const ALL: [ActionKind; 6] = [
        ActionKind::GenerateSpeech,
        ActionKind::IdentifyObject,
        ActionKind::LookupWord,
        ActionKind::GenerateStory,
        ActionKind::GenerateIllustration,
        ActionKind::GenerateSticker,
    ];

    /// Wire name of the action
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::GenerateSpeech => "generateSpeech",
            ActionKind::IdentifyObject => "identifyObject",
            ActionKind::LookupWord => "lookupWord",
            ActionKind::GenerateStory => "generateStory",
            ActionKind::GenerateIllustration => "generateIllustration",
            ActionKind::GenerateSticker => "generateSticker",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

/// A request to the action endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ActionRequest {
    GenerateSpeech(SpeechRequest),
    IdentifyObject(IdentifyObjectRequest),
    LookupWord(LookupWordRequest),
    GenerateStory(StoryRequest),
    GenerateIllustration(IllustrationRequest),
    GenerateSticker(StickerRequest),
}

impl ActionRequest {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionRequest::GenerateSpeech(_) => ActionKind::GenerateSpeech,
            ActionRequest::IdentifyObject(_) => ActionKind::IdentifyObject,
            ActionRequest::LookupWord(_) => ActionKind::LookupWord,
            ActionRequest::GenerateStory(_) => ActionKind::GenerateStory,
            ActionRequest::GenerateIllustration(_) => ActionKind::GenerateIllustration,
            ActionRequest::GenerateSticker(_) => ActionKind::GenerateSticker,
        }
    }

    /// Parse a raw request body
    ///
    /// An empty body counts as `{}`. Malformed JSON and payload fields of the
    /// wrong type are `BadRequest`; a missing or unrecognized `action` is
    /// `UnknownAction`.
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        let value: Value = if body.iter().all(u8::is_ascii_whitespace) {
            Value::Object(Default::default())
        } else {
            serde_json::from_slice(body)
                .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))?
        };

        let kind = value
            .get("action")
            .and_then(Value::as_str)
            .and_then(ActionKind::from_name)
            .ok_or(AppError::UnknownAction)?;

        serde_json::from_value(value).map_err(|e| {
            AppError::BadRequest(format!("Invalid {} payload: {}", kind.as_str(), e))
        })
    }
}
