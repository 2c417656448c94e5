//! Request logging utilities for provider calls
//!
//! Provides structured logging with correlation IDs for tracing an action
//! through dispatch, the provider round trip and response shaping.

use std::time::Instant;
use tracing::{error, info, warn, Span};
use uuid::Uuid;

/// Context for tracking one action through the system
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request (for log correlation)
    pub trace_id: String,
    /// When the request started
    pub start_time: Instant,
    /// Model provider handling this request
    pub provider: String,
    /// Action being served
    pub action: String,
    /// Model being used (if applicable)
    pub model: Option<String>,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(provider: &str, action: &str) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string()[..8].to_string(), // Short ID for readability
            start_time: Instant::now(),
            provider: provider.to_string(),
            action: action.to_string(),
            model: None,
        }
    }

    /// Set the model for this request
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    /// Get elapsed time in seconds, for histograms
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Log request initiation
    pub fn log_request_start(&self) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            action = %self.action,
            model = ?self.model,
            "Action started"
        );
    }

    /// Log successful request completion
    pub fn log_request_complete(&self) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            action = %self.action,
            model = ?self.model,
            elapsed_ms = %self.elapsed_ms(),
            "Action completed successfully"
        );
    }

    /// Log a warning condition
    pub fn log_warning(&self, message: &str) {
        warn!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            action = %self.action,
            elapsed_ms = %self.elapsed_ms(),
            message = %message,
            "Warning during action"
        );
    }

    /// Log request failure
    pub fn log_error(&self, error: &str) {
        error!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            action = %self.action,
            model = ?self.model,
            elapsed_ms = %self.elapsed_ms(),
            error = %error,
            "Action failed"
        );
    }

    /// Create a tracing span for this request
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "action",
            trace_id = %self.trace_id,
            provider = %self.provider,
            action = %self.action,
            model = ?self.model,
        )
    }
}
