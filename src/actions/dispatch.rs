//! Action dispatch
//!
//! Maps each action onto a provider request, runs it, and shapes the reply
//! into the action's result type.

use super::{
    json::parse_model_json,
    prompts,
    request::{ActionKind, ActionRequest},
    response::{ActionResponse, ImageResult, SpeechResult},
};
use crate::{
    config::Config,
    error::AppResult,
    provider::{
        types::{GenerationConfig, Part},
        GenerateContentRequest, GenerateContentResponse, ModelProvider,
    },
};

/// Mime type of images uploaded by the client (always re-encoded as JPEG)
const UPLOAD_MIME_TYPE: &str = "image/jpeg";

/// Aspect ratio requested for illustrations and stickers
const IMAGE_ASPECT_RATIO: &str = "1:1";

/// Model serving a given action
pub fn model_for(kind: ActionKind, config: &Config) -> &str {
    match kind {
        ActionKind::GenerateSpeech => config.speech_model.as_str(),
        ActionKind::IdentifyObject | ActionKind::LookupWord | ActionKind::GenerateStory => {
            config.text_model.as_str()
        }
        ActionKind::GenerateIllustration | ActionKind::GenerateSticker => {
            config.image_model.as_str()
        }
    }
}

/// Build the `generateContent` body for an action
pub fn build_provider_request(request: &ActionRequest, config: &Config) -> GenerateContentRequest {
    match request {
        ActionRequest::GenerateSpeech(speech) => GenerateContentRequest::user(
            vec![Part::text(speech.text.trim())],
            GenerationConfig::audio(&config.voice_name),
        ),
        ActionRequest::IdentifyObject(identify) => GenerateContentRequest::user(
            vec![
                Part::inline(UPLOAD_MIME_TYPE, &identify.image_base64),
                Part::text(prompts::identify_object(identify.theme.as_ref())),
            ],
            GenerationConfig::json(),
        ),
        ActionRequest::LookupWord(lookup) => GenerateContentRequest::user(
            vec![Part::text(prompts::lookup_word(
                &lookup.word,
                &lookup.context,
                &lookup.age_group,
            ))],
            GenerationConfig::json(),
        ),
        ActionRequest::GenerateStory(story) => GenerateContentRequest::user(
            vec![Part::text(prompts::story(
                &story.items,
                story.theme.as_ref(),
                story.kid_profile.as_ref(),
                story.user_prompt.as_deref(),
            ))],
            GenerationConfig::json(),
        ),
        ActionRequest::GenerateIllustration(illustration) => GenerateContentRequest::user(
            vec![Part::text(prompts::illustration(
                &illustration.prompt,
                &illustration.style,
                &illustration.character_visual,
            ))],
            GenerationConfig::image(IMAGE_ASPECT_RATIO),
        ),
        ActionRequest::GenerateSticker(sticker) => GenerateContentRequest::user(
            vec![
                Part::inline(UPLOAD_MIME_TYPE, &sticker.image_base64),
                Part::text(prompts::sticker(&sticker.word)),
            ],
            GenerationConfig::image(IMAGE_ASPECT_RATIO),
        ),
    }
}

/// Extract the action's result from a provider reply
pub fn shape_response(
    kind: ActionKind,
    response: &GenerateContentResponse,
) -> AppResult<ActionResponse> {
    let text = response.text();
    let shaped = match kind {
        ActionKind::GenerateSpeech => ActionResponse::Speech(SpeechResult::from_response(response)),
        ActionKind::IdentifyObject => {
            ActionResponse::ObjectIdentification(parse_model_json(text.as_deref())?)
        }
        ActionKind::LookupWord => ActionResponse::WordLookup(parse_model_json(text.as_deref())?),
        ActionKind::GenerateStory => ActionResponse::Story(parse_model_json(text.as_deref())?),
        ActionKind::GenerateIllustration | ActionKind::GenerateSticker => {
            ActionResponse::Image(ImageResult::from_response(response))
        }
    };
    Ok(shaped)
}

/// Run one action end to end against the provider
pub async fn dispatch(
    provider: &dyn ModelProvider,
    config: &Config,
    request: &ActionRequest,
) -> AppResult<ActionResponse> {
    let kind = request.kind();
    let body = build_provider_request(request, config);
    let response = provider
        .generate_content(model_for(kind, config), &body)
        .await?;
    shape_response(kind, &response)
}
