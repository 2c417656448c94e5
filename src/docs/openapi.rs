//! OpenAPI specification for the WordQuest proxy
//!
//! Aggregates the action endpoint, health endpoint and their schemas into a
//! single OpenAPI document.

use utoipa::OpenApi;

use crate::{
    actions::{
        ActionRequest, ActionResponse, IdentifyObjectRequest, IllustrationRequest, ImageResult,
        LearnedWord, LookupWordRequest, ObjectIdentification, SpeechRequest, SpeechResult,
        StickerRequest, Story, StoryPage, StoryRequest, Theme, WordLookup,
    },
    error::ErrorResponse,
    routes::health::{DependencyCheck, DependencyChecks, HealthResponse, HealthStatus},
};

/// OpenAPI specification for the WordQuest API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "WordQuest API",
        version = "1.0.0",
        description = "Action proxy in front of the Gemini API for the WordQuest kids learning app"
    ),
    paths(
        crate::routes::gemini::handle_action,
        crate::routes::health::health_check
    ),
    components(
        schemas(
            // Request
            Theme,
            LearnedWord,
            SpeechRequest,
            IdentifyObjectRequest,
            LookupWordRequest,
            StoryRequest,
            IllustrationRequest,
            StickerRequest,
            ActionRequest,
            // Response
            SpeechResult,
            ObjectIdentification,
            WordLookup,
            StoryPage,
            Story,
            ImageResult,
            ActionResponse,
            // Error
            ErrorResponse,
            // Health
            HealthStatus,
            DependencyCheck,
            DependencyChecks,
            HealthResponse,
        )
    ),
    tags(
        (name = "Actions", description = "Generative AI actions"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;
