use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use reqwest::{Client, Method};
use serde_json::{json, Value};

use intake_relay::config::{Config, ForwardConfig};
use intake_relay::forward::WebhookForwarder;

pub const TEST_TOKEN: &str = "test-shared-token";

/// A running intake server.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON submission to the intake route, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/intake"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a form-urlencoded submission, return (body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/intake"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Send an arbitrary method to the intake route.
    pub async fn request(&self, method: Method) -> reqwest::Response {
        self.client
            .request(method, self.url("/intake"))
            .send()
            .await
            .expect("intake request failed")
    }
}

/// A stub downstream webhook that records every payload it receives.
pub struct Downstream {
    pub url: String,
    pub received: Arc<Mutex<Vec<Value>>>,
}

impl Downstream {
    pub fn payloads(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct DownstreamState {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<Value>>>,
}

async fn downstream_hook(
    State(state): State<DownstreamState>,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    state.received.lock().unwrap().push(payload);
    (
        state.status,
        [("content-type", "application/json")],
        state.body,
    )
}

/// Spawn a downstream that answers every POST with `status` and raw `body`.
pub async fn spawn_downstream(status: StatusCode, body: &str) -> Downstream {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = DownstreamState {
        status,
        body: body.to_string(),
        received: received.clone(),
    };

    let app = Router::new()
        .route("/hook", post(downstream_hook))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind downstream");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Downstream failed");
    });

    Downstream {
        url: format!("http://{addr}/hook"),
        received,
    }
}

/// A URL nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind placeholder listener");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/hook")
}

pub fn forward_to(url: &str) -> ForwardConfig {
    ForwardConfig {
        shared_token: Some(TEST_TOKEN.to_string()),
        url: Some(url.to_string()),
    }
}

/// Spawn the intake app with the given downstream settings.
pub async fn spawn_app(forward: ForwardConfig) -> TestApp {
    spawn_app_with_body_limit(forward, 1_048_576).await
}

/// Spawn the intake app with a custom inbound body cap.
pub async fn spawn_app_with_body_limit(forward: ForwardConfig, max_body_size: usize) -> TestApp {
    let config = Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        max_body_size,
        log_level: "warn".to_string(),
        forward,
    };

    let app = intake_relay::build_app(config, Arc::new(WebhookForwarder::new()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
    }
}

/// A submission that passes every rule.
pub fn valid_submission() -> Value {
    json!({
        "businessName": "Acme Plumbing",
        "contactName": "Jordan Lee",
        "email": "jordan@acme.test",
        "phone": "+1 555 0100",
        "role": "Owner",
        "goLiveDate": "2026-12-01",
        "primaryGoal": "Book more jobs",
        "currentTools": "Spreadsheets",
        "leadSources": "Referrals",
        "paymentModel": "Invoice",
        "numberOfUsers": "3-5",
        "customerUpdates": "SMS",
        "budgetRange": "$500-$1000",
        "decisionMaker": "Yes",
        "priorities": ["Scheduling", "Invoicing"],
    })
}
