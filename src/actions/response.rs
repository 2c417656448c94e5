//! Action result types
//!
//! Every field is optional. Whatever the model leaves out, or sends with the
//! wrong type, is reported as `null` (or `[]` for story pages) rather than
//! failing the request.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::provider::GenerateContentResponse;

/// A value of the wrong JSON type reads as `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Non-arrays read as empty; elements that are not objects are dropped
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };
    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// `generateSpeech` result
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SpeechResult {
    /// Base64 audio as returned by the provider
    pub audio_base64: Option<String>,
}

impl SpeechResult {
    /// Audio is taken from the first part of the first candidate only
    pub fn from_response(response: &GenerateContentResponse) -> Self {
        Self {
            audio_base64: response
                .leading_inline_data()
                .map(|inline| inline.data.clone()),
        }
    }
}

/// `identifyObject` result
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectIdentification {
    #[schema(example = "apple")]
    #[serde(deserialize_with = "lenient")]
    pub word: Option<String>,
    #[schema(example = "A round fruit that grows on trees.")]
    #[serde(deserialize_with = "lenient")]
    pub definition: Option<String>,
    #[schema(example = "Shiny and red with a little brown stem")]
    #[serde(deserialize_with = "lenient")]
    pub visual_detail: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub matches_theme: Option<bool>,
    #[schema(example = "Great find! Apples are red.")]
    #[serde(deserialize_with = "lenient")]
    pub feedback: Option<String>,
}

/// `lookupWord` result
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct WordLookup {
    #[serde(deserialize_with = "lenient")]
    pub definition: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub fun_fact: Option<String>,
    #[schema(example = "🍎")]
    #[serde(deserialize_with = "lenient")]
    pub emoji: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub visual_detail: Option<String>,
}

/// One page of a generated story
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct StoryPage {
    #[schema(example = 1)]
    #[serde(deserialize_with = "lenient")]
    pub page_number: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
}

/// `generateStory` result
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Story {
    #[schema(example = "Fox and the Red Apple")]
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub main_character_visual: Option<String>,
    #[serde(deserialize_with = "lenient_vec")]
    pub pages: Vec<StoryPage>,
}

/// `generateIllustration` / `generateSticker` result
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageResult {
    /// `data:<mime>;base64,<data>` URL
    #[schema(example = "data:image/png;base64,iVBORw0KGgo=")]
    pub image_base64: Option<String>,
}

impl ImageResult {
    /// Image is the first part of the first candidate that carries inline data
    pub fn from_response(response: &GenerateContentResponse) -> Self {
        Self {
            image_base64: response.first_inline_data().map(|inline| inline.to_data_url()),
        }
    }
}

/// Body of a successful action response
#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum ActionResponse {
    Speech(SpeechResult),
    ObjectIdentification(ObjectIdentification),
    WordLookup(WordLookup),
    Story(Story),
    Image(ImageResult),
}

impl ActionResponse {
    /// Whether the provider produced the binary payload the action asked for
    pub fn is_missing_media(&self) -> bool {
        match self {
            ActionResponse::Speech(speech) => speech.audio_base64.is_none(),
            ActionResponse::Image(image) => image.image_base64.is_none(),
            _ => false,
        }
    }
}
