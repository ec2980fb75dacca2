pub mod intake;

use axum::http::{HeaderName, HeaderValue};
use axum::routing::any;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::SharedState;

pub const INTAKE_PATH: &str = "/intake";

pub fn intake_routes() -> Router<SharedState> {
    let cors_headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-origin"),
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-methods"),
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-headers"),
            HeaderValue::from_static("Content-Type"),
        ));

    Router::new()
        .route(INTAKE_PATH, any(intake::intake))
        .layer(cors_headers)
}
