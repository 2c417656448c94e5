//! Action endpoint
//!
//! `POST /api/gemini` with `{ "action": ..., ...fields }`. Each request is
//! parsed into an [`ActionRequest`], forwarded to the model provider and
//! answered with the action's result JSON.

use std::sync::Arc;

use axum::{
    extract::State,
    http::Method,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use tracing::Instrument;

use crate::{
    actions::{self, ActionRequest},
    error::{AppError, AppResult},
    provider::RequestContext,
    routes::metrics::{record_action, record_upstream_error},
    AppState,
};

/// Action endpoint handler
///
/// Checks run in order: method, credentials, body, action.
#[utoipa::path(
    post,
    path = "/api/gemini",
    tag = "Actions",
    request_body = ActionRequest,
    responses(
        (status = 200, description = "Action result", body = crate::actions::ActionResponse),
        (status = 400, description = "Unknown action or malformed body", body = crate::error::ErrorResponse),
        (status = 405, description = "Only POST allowed", body = String, content_type = "text/plain"),
        (status = 500, description = "Missing credentials or provider failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn handle_action(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> AppResult<Response> {
    if method != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }
    if !state.provider.is_configured() {
        return Err(AppError::MissingCredentials);
    }

    let request = ActionRequest::from_body(&body)?;
    let kind = request.kind();

    let ctx = RequestContext::new(state.provider.name(), kind.as_str())
        .with_model(actions::dispatch::model_for(kind, &state.config));
    ctx.log_request_start();

    let result = actions::dispatch(state.provider.as_ref(), &state.config, &request)
        .instrument(ctx.create_span())
        .await;

    match result {
        Ok(response) => {
            if response.is_missing_media() {
                ctx.log_warning("Provider reply carried no inline data");
            }
            ctx.log_request_complete();
            record_action(kind.as_str(), "success", ctx.elapsed_secs());
            Ok(Json(response).into_response())
        }
        Err(e) => {
            ctx.log_error(&e.to_string());
            record_action(kind.as_str(), "error", ctx.elapsed_secs());
            if matches!(e, AppError::Upstream(_) | AppError::Http(_)) {
                record_upstream_error(kind.as_str());
            }
            Err(e)
        }
    }
}
