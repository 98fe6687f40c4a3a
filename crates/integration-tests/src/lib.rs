//! Integration test harness for the Tableside console.
//!
//! Tests run the real console router on an ephemeral port, pointed at an
//! in-process stub of the Tableside backend. The stub records every request
//! it receives and answers from a table of canned responses.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tableside-integration-tests
//! ```
//!
//! No external services are needed.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use reqwest::{Client, redirect::Policy};
use serde_json::{Value, json};

use tableside_console::build_router;
use tableside_console::config::{ApiConfig, ConsoleConfig};
use tableside_console::state::AppState;

/// Version prefix the stub serves under, as the real backend does.
pub const API_PREFIX: &str = "/api/v1";

/// Token used by [`TestConsole::sign_in`].
pub const TEST_TOKEN: &str = "test-token";

// ============================================================================
// Stub backend
// ============================================================================

/// A request received by the stub backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    /// Path below [`API_PREFIX`], e.g. `/users/profile`.
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct StubState {
    responses: Mutex<HashMap<(Method, String), (StatusCode, String)>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// In-process stand-in for the Tableside REST backend.
#[derive(Clone)]
pub struct StubBackend {
    addr: SocketAddr,
    state: Arc<StubState>,
}

impl StubBackend {
    /// Bind to an ephemeral port and start serving.
    pub async fn start() -> Self {
        let state = Arc::new(StubState::default());
        let app = Router::new().fallback(handle).with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr = listener.local_addr().expect("Stub backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub backend failed");
        });

        Self { addr, state }
    }

    /// Base URL to configure the console with.
    #[must_use]
    pub fn api_url(&self) -> String {
        format!("http://{}{API_PREFIX}", self.addr)
    }

    /// Answer `method path` with a JSON body.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: &Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    /// Answer `method path` with a raw body.
    pub fn respond_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).expect("Invalid stub status");
        self.state
            .responses
            .lock()
            .expect("Stub state poisoned")
            .insert((method, path.to_owned()), (status, body.to_owned()));
    }

    /// Every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .expect("Stub state poisoned")
            .clone()
    }

    /// Requests received for one method and path.
    #[must_use]
    pub fn requests_to(&self, method: &Method, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == *method && r.path == path)
            .collect()
    }
}

async fn handle(
    State(state): State<Arc<StubState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or_else(|| uri.path())
        .to_owned();

    state
        .requests
        .lock()
        .expect("Stub state poisoned")
        .push(RecordedRequest {
            method: method.clone(),
            path: path.clone(),
            authorization: headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned),
            body: serde_json::from_slice(&body).ok(),
        });

    let canned = state
        .responses
        .lock()
        .expect("Stub state poisoned")
        .get(&(method, path))
        .cloned();

    match canned {
        Some((status, body)) => (
            status,
            [("content-type", "application/json")],
            body,
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [("content-type", "application/json")],
            json!({ "message": "Route not found" }).to_string(),
        )
            .into_response(),
    }
}

// ============================================================================
// Console under test
// ============================================================================

/// A running console wired to a fresh stub backend.
pub struct TestConsole {
    pub backend: StubBackend,
    pub client: Client,
    base_url: String,
}

impl TestConsole {
    /// Start a stub backend and a console pointed at it.
    pub async fn start() -> Self {
        let backend = StubBackend::start().await;

        let config = ConsoleConfig {
            host: "127.0.0.1".parse().expect("Invalid host"),
            port: 0,
            base_url: "http://127.0.0.1".to_owned(),
            api: ApiConfig::new(&backend.api_url()).expect("Invalid stub API URL"),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 0.0,
            sentry_traces_sample_rate: 0.0,
        };
        let app = build_router(AppState::new(config).expect("Failed to create state"));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind console");
        let addr = listener.local_addr().expect("Console has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Console failed");
        });

        let client = Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            backend,
            client,
            base_url: format!("http://{addr}"),
        }
    }

    /// Start a console and open a session with [`TEST_TOKEN`].
    pub async fn signed_in() -> Self {
        let console = Self::start().await;
        console.sign_in(TEST_TOKEN).await;
        console
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Submit the session bootstrap form.
    pub async fn sign_in(&self, token: &str) {
        let resp = self
            .client
            .post(self.url("/auth/session"))
            .form(&[("access_token", token)])
            .send()
            .await
            .expect("Failed to start session");
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), Some("/profile"));
    }

    /// Full page load.
    pub async fn get_page(&self, path: &str) -> (StatusCode, String) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send request");
        read(resp).await
    }

    /// HTMX fragment load.
    pub async fn get_fragment(&self, path: &str) -> (StatusCode, String) {
        let resp = self
            .client
            .get(self.url(path))
            .header("HX-Request", "true")
            .send()
            .await
            .expect("Failed to send request");
        read(resp).await
    }

    /// HTMX form submission.
    pub async fn post_fragment(&self, path: &str, form: &[(&str, &str)]) -> (StatusCode, String) {
        let resp = self
            .client
            .post(self.url(path))
            .header("HX-Request", "true")
            .form(form)
            .send()
            .await
            .expect("Failed to send request");
        read(resp).await
    }
}

async fn read(resp: reqwest::Response) -> (StatusCode, String) {
    let status = resp.status();
    let body = resp.text().await.expect("Failed to read response");
    (status, body)
}

/// `Location` header of a redirect.
#[must_use]
pub fn location(resp: &reqwest::Response) -> Option<&str> {
    resp.headers().get("location").and_then(|v| v.to_str().ok())
}

// ============================================================================
// Fixtures
// ============================================================================

/// Profile record for `role`, attached to tenant `t1` and outlet `o1`.
#[must_use]
pub fn profile_json(role: &str) -> Value {
    json!({
        "_id": "u1",
        "name": "Anita Menon",
        "email": "anita@spiceroute.in",
        "phoneNumber": "9800012345",
        "role": role,
        "status": true,
        "tenant": { "tenantId": "t1", "name": "Spice Route" },
        "outlet": { "outletId": "o1", "name": "Koramangala" },
        "createdAt": "2024-03-05T10:00:00Z"
    })
}

/// Wrap a payload the way the backend does.
#[must_use]
pub fn envelope(data: Value) -> Value {
    json!({ "data": data })
}

/// Serve `profile` from `GET /users/profile`.
pub fn serve_profile(backend: &StubBackend, profile: &Value) {
    backend.respond(Method::GET, "/users/profile", 200, &envelope(profile.clone()));
}
