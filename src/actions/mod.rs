//! Actions served by the proxy
//!
//! Request/response contracts, prompt templates and the dispatch from an
//! action onto a provider call. Shared with the client wrapper.

pub mod dispatch;
pub mod json;
pub mod prompts;
pub mod request;
pub mod response;

pub use dispatch::dispatch;
pub use request::{
    ActionKind, ActionRequest, IdentifyObjectRequest, IllustrationRequest, LearnedWord,
    LookupWordRequest, SpeechRequest, StickerRequest, StoryRequest, Theme,
};
pub use response::{
    ActionResponse, ImageResult, ObjectIdentification, SpeechResult, Story, StoryPage, WordLookup,
};
