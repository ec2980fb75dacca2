use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::envelope::Envelope;
use crate::forward::ForwardError;

#[derive(Debug)]
pub enum IntakeError {
    MethodNotAllowed,
    Configuration,
    InvalidBody(String),
    Validation(String),
    Upstream(ForwardError),
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::MethodNotAllowed => write!(f, "Method not allowed"),
            IntakeError::Configuration => {
                write!(f, "Configuration Error: SHARED_TOKEN or APPS_SCRIPT_URL not set")
            }
            IntakeError::InvalidBody(msg) => write!(f, "Invalid Body: {msg}"),
            IntakeError::Validation(msg) => write!(f, "Validation Error: {msg}"),
            IntakeError::Upstream(err) => write!(f, "Upstream Error: {err}"),
        }
    }
}

impl IntakeError {
    pub fn status(&self) -> StatusCode {
        match self {
            IntakeError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            IntakeError::InvalidBody(_) | IntakeError::Validation(_) => StatusCode::BAD_REQUEST,
            IntakeError::Configuration | IntakeError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to the caller. Upstream detail stays server-side.
    pub fn public_message(&self) -> String {
        match self {
            IntakeError::MethodNotAllowed => "Method not allowed".to_string(),
            IntakeError::Configuration => "Server configuration error".to_string(),
            IntakeError::InvalidBody(_) => "Invalid request body".to_string(),
            IntakeError::Validation(msg) => msg.clone(),
            IntakeError::Upstream(_) => "Failed to submit form".to_string(),
        }
    }
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        match &self {
            IntakeError::Configuration | IntakeError::Upstream(_) => tracing::error!("{self}"),
            IntakeError::InvalidBody(_) => tracing::debug!("{self}"),
            IntakeError::MethodNotAllowed | IntakeError::Validation(_) => {}
        }

        let body = Envelope::failure(self.public_message());
        (self.status(), Json(body)).into_response()
    }
}

impl From<ForwardError> for IntakeError {
    fn from(err: ForwardError) -> Self {
        IntakeError::Upstream(err)
    }
}
