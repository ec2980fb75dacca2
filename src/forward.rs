use async_trait::async_trait;
use serde_json::{Map, Value};

/// Why a forward attempt produced no usable response.
#[derive(Debug, Clone, PartialEq)]
pub enum ForwardError {
    Timeout,
    Transport(String),
    /// Downstream answered with a non-2xx status. Its body is not read.
    Status(u16),
    InvalidBody(String),
}

impl std::fmt::Display for ForwardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForwardError::Timeout => write!(f, "downstream request timed out"),
            ForwardError::Transport(msg) => write!(f, "downstream request failed: {msg}"),
            ForwardError::Status(code) => write!(f, "downstream responded with status {code}"),
            ForwardError::InvalidBody(msg) => write!(f, "downstream response is not JSON: {msg}"),
        }
    }
}

impl From<reqwest::Error> for ForwardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ForwardError::Timeout
        } else {
            ForwardError::Transport(err.to_string())
        }
    }
}

/// Delivers a validated submission to the downstream webhook.
#[async_trait]
pub trait Forwarder: Send + Sync {
    async fn forward(&self, url: &str, payload: &Value) -> Result<Value, ForwardError>;
}

pub struct WebhookForwarder {
    client: reqwest::Client,
}

impl WebhookForwarder {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for WebhookForwarder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Forwarder for WebhookForwarder {
    async fn forward(&self, url: &str, payload: &Value) -> Result<Value, ForwardError> {
        let resp = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ForwardError::Status(status.as_u16()));
        }

        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ForwardError::InvalidBody(e.to_string()))
    }
}

/// Copy the submission and stamp the shared token over any `token` the
/// caller sent.
pub fn build_payload(submission: &Map<String, Value>, shared_token: &str) -> Value {
    let mut payload = submission.clone();
    payload.insert("token".to_string(), Value::String(shared_token.to_string()));
    Value::Object(payload)
}
