pub mod config;
pub mod envelope;
pub mod error;
pub mod forward;
pub mod routes;
pub mod state;
pub mod submission;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::forward::Forwarder;
use crate::state::{AppState, SharedState};

pub fn build_app(config: Config, forwarder: Arc<dyn Forwarder>) -> Router {
    if config.forward.resolve().is_none() {
        tracing::warn!("SHARED_TOKEN or APPS_SCRIPT_URL not set; intake requests will be rejected");
    }

    let state: SharedState = Arc::new(AppState { config, forwarder });

    Router::new()
        .merge(routes::intake_routes())
        .route("/health", axum::routing::get(health))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
