//! API Documentation module
//!
//! Provides OpenAPI specification generation for the action endpoint using utoipa.

mod openapi;

pub use openapi::ApiDoc;
