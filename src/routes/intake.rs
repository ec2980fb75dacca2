use axum::extract::{Request, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::Instrument;
use uuid::Uuid;

use crate::envelope::Envelope;
use crate::error::IntakeError;
use crate::forward;
use crate::state::SharedState;
use crate::submission::{fields, parser};

/// Entry point for every method on the intake route. CORS headers are added
/// by the router layer, so every path below inherits them.
pub async fn intake(State(state): State<SharedState>, request: Request) -> Response {
    let method = request.method().clone();

    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    if method != Method::POST {
        return IntakeError::MethodNotAllowed.into_response();
    }

    let span = tracing::info_span!("intake", request_id = %Uuid::now_v7());
    async move {
        match submit(&state, request).await {
            Ok(resp) => resp,
            Err(e) => e.into_response(),
        }
    }
    .instrument(span)
    .await
}

async fn submit(state: &SharedState, request: Request) -> Result<Response, IntakeError> {
    let (shared_token, url) = state
        .config
        .forward
        .resolve()
        .ok_or(IntakeError::Configuration)?;

    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let body = axum::body::to_bytes(request.into_body(), state.config.max_body_size)
        .await
        .map_err(|e| IntakeError::InvalidBody(format!("Failed to read body: {e}")))?;

    let submission =
        parser::parse_body(content_type.as_deref(), &body).map_err(IntakeError::InvalidBody)?;

    fields::validate(&submission).map_err(IntakeError::Validation)?;

    let payload = forward::build_payload(&submission, shared_token);
    let data = state.forwarder.forward(url, &payload).await?;

    tracing::info!(fields = submission.len(), "Submission forwarded");

    Ok((StatusCode::OK, Json(Envelope::success(data))).into_response())
}
