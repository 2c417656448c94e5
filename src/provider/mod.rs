//! Model provider abstraction layer
//!
//! Defines the trait the action handlers call to reach the hosted model,
//! plus the Gemini implementation and its wire types.

pub mod gemini;
pub mod logging;
pub mod types;

use async_trait::async_trait;

use crate::error::AppResult;

pub use gemini::GeminiProvider;
pub use logging::RequestContext;
pub use types::{GenerateContentRequest, GenerateContentResponse};

/// Trait defining the interface for model providers
///
/// # Security
///
/// Implementations own the provider credentials. Nothing a client sends is
/// forwarded as a header.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Get the provider name for logging and metrics
    fn name(&self) -> &'static str;

    /// Whether credentials are available to make calls
    fn is_configured(&self) -> bool;

    /// Run a single `generateContent` call against `model`
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> AppResult<GenerateContentResponse>;
}
