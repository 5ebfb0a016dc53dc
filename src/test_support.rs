//! In-process HTTP responder for tests.
//!
//! An axum app on an ephemeral port that answers with canned responses keyed
//! by request path and records every request it receives.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::download::video::VideoExtractor;
use crate::error::{Error, Result};

/// A canned response for one path (query string ignored).
#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Route {
    pub fn json(path: &str, status: u16, body: serde_json::Value) -> Self {
        Self::bytes(path, status, "application/json", body.to_string().into_bytes())
    }

    pub fn bytes(path: &str, status: u16, content_type: &str, body: Vec<u8>) -> Self {
        Self {
            path: path.to_string(),
            status,
            content_type: content_type.to_string(),
            body,
        }
    }
}

/// A request as seen by the server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Path and query string.
    pub target: String,
    pub headers: HeaderMap,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Clone, Default)]
struct ServerState {
    routes: Arc<Mutex<Vec<Route>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct TestServer {
    addr: SocketAddr,
    state: ServerState,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = ServerState {
            routes: Arc::new(Mutex::new(routes)),
            ..Default::default()
        };

        let app = Router::new().fallback(respond).with_state(state.clone());
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// Add a route after start-up, e.g. one whose body embeds [`Self::url`].
    pub fn route(&self, route: Route) {
        self.state.routes.lock().unwrap().push(route);
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn respond(State(state): State<ServerState>, request: Request) -> Response {
    let uri = request.uri();
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let route = state
        .routes
        .lock()
        .unwrap()
        .iter()
        .find(|r| r.path == uri.path())
        .cloned();

    state.requests.lock().unwrap().push(RecordedRequest {
        target,
        headers: request.headers().clone(),
    });

    match route {
        Some(route) => {
            let status = StatusCode::from_u16(route.status).unwrap();
            (status, [(header::CONTENT_TYPE, route.content_type)], route.body).into_response()
        }
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

/// Video extractor that writes a marker file and remembers its calls.
#[derive(Debug, Default, Clone)]
pub struct RecordingExtractor {
    calls: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingExtractor {
    /// An extractor whose every call fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoExtractor for RecordingExtractor {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn extract(&self, url: &str, output: &Path) -> Result<()> {
        self.calls.lock().unwrap().push(url.to_string());
        if self.fail {
            return Err(Error::Extractor("unsupported URL".to_string()));
        }
        tokio::fs::write(output, b"mp4").await?;
        Ok(())
    }
}
