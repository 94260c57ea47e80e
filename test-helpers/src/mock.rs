//! A programmable stand-in for the booking backend.
//!
//! Tests register canned responses per method and path; every request that
//! reaches the server is recorded so tests can assert on what the client
//! actually sent.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl MockResponse {
    /// 200 with a JSON body.
    pub fn json(body: Value) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    /// A non-JSON body, as returned by proxies and some error pages.
    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    /// 200 with no body at all.
    pub fn empty() -> Self {
        Self::text(200, "")
    }

    /// Hold the response back for `delay` before sending it.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
pub struct MockBackend {
    routes: Mutex<HashMap<(String, String), MockResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockBackend {
    /// Answer `method path` with `response` from now on, replacing any
    /// earlier mock for the same route.
    pub fn mock(&self, method: &str, path: &str, response: MockResponse) {
        self.routes
            .lock()
            .unwrap()
            .insert((method.to_uppercase(), path.to_string()), response);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    fn record(&self, request: RecordedRequest) {
        self.requests.lock().unwrap().push(request);
    }

    fn response_for(&self, method: &str, path: &str) -> Option<MockResponse> {
        self.routes
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }
}

/// Catch-all handler serving whatever has been mocked for the route.
pub async fn serve(
    req: HttpRequest,
    body: web::Bytes,
    backend: web::Data<MockBackend>,
) -> HttpResponse {
    let method = req.method().as_str().to_string();
    let path = req.path().to_string();

    backend.record(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query: req.query_string().to_string(),
        authorization: req
            .headers()
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body: serde_json::from_slice(&body).ok(),
    });

    let Some(mock) = backend.response_for(&method, &path) else {
        tracing::warn!("no mock for {method} {path}");
        return HttpResponse::NotFound()
            .json(json!({ "message": format!("No mock for {method} {path}") }));
    };

    if let Some(delay) = mock.delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(mock.status)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status)
        .content_type("application/json")
        .body(mock.body)
}
