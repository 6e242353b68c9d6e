// OpenSwift Rust Library for OpenStack Swift Compatible Object Storage
// Copyright 2025 OpenSwift Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! In-process mock Swift server recording every request it receives.

#![allow(dead_code)]

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use openswift::swift::client::{SwiftClient, SwiftClientBuilder};
use openswift::swift::creds::StaticProvider;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const TEST_AUTH_TOKEN: &str = "AUTH_tk0123456789abcdef";

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub headers: HashMap<String, String>,
}

impl RecordedRequest {
    /// Case-insensitive header lookup; names are recorded lower-cased.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

#[derive(Default)]
struct ServerState {
    requests: Mutex<Vec<RecordedRequest>>,
    names: Mutex<Vec<String>>,
    page_size: Mutex<usize>,
    forced_statuses: Mutex<HashMap<(String, String), u16>>,
    container_headers: Mutex<HashMap<String, Vec<(String, String)>>>,
    listing_override: Mutex<Option<(String, String)>>,
}

pub struct MockSwiftServer {
    state: Arc<ServerState>,
    addr: SocketAddr,
}

impl MockSwiftServer {
    pub async fn spawn() -> MockSwiftServer {
        let _ = env_logger::try_init();

        let state = Arc::new(ServerState {
            page_size: Mutex::new(10_000),
            ..Default::default()
        });
        let router = Router::new()
            .route("/v1/{account}", get(list_handler))
            .route("/v1/{account}/{container}", any(container_handler))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        MockSwiftServer { state, addr }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/v1/AUTH_test", self.addr)
    }

    /// A client pointed at this server, authenticating with
    /// [`TEST_AUTH_TOKEN`].
    pub fn client(&self) -> SwiftClient {
        SwiftClientBuilder::new(self.base_url().parse().unwrap())
            .provider(Some(Arc::new(StaticProvider::new(TEST_AUTH_TOKEN))))
            .build()
            .unwrap()
    }

    /// Sets the full, already sorted container listing of the account.
    pub fn set_names(&self, names: &[&str]) {
        *self.state.names.lock().unwrap() = names.iter().map(|s| s.to_string()).collect();
    }

    /// Caps how many names a single listing response returns.
    pub fn set_page_size(&self, page_size: usize) {
        *self.state.page_size.lock().unwrap() = page_size;
    }

    /// Makes the given container operation answer with a fixed status.
    pub fn force_status(&self, method: &str, container: &str, status: u16) {
        self.state
            .forced_statuses
            .lock()
            .unwrap()
            .insert((method.to_string(), container.to_string()), status);
    }

    /// Headers returned by HEAD requests for the given container.
    pub fn set_container_headers(&self, container: &str, headers: &[(&str, &str)]) {
        self.state.container_headers.lock().unwrap().insert(
            container.to_string(),
            headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
    }

    /// Makes every listing request answer 200 with this exact body.
    pub fn override_listing(&self, content_type: &str, body: &str) {
        *self.state.listing_override.lock().unwrap() =
            Some((content_type.to_string(), body.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }
}

fn record(
    state: &ServerState,
    method: &Method,
    uri: &Uri,
    query: &HashMap<String, String>,
    headers: &HeaderMap,
) {
    let mut recorded = HashMap::new();
    for (name, value) in headers {
        if let Ok(v) = value.to_str() {
            recorded.insert(name.as_str().to_string(), v.to_string());
        }
    }
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: query.clone(),
        headers: recorded,
    });
}

async fn list_handler(
    State(state): State<Arc<ServerState>>,
    method: Method,
    uri: Uri,
    Path(_account): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    record(&state, &method, &uri, &query, &headers);

    if let Some((content_type, body)) = state.listing_override.lock().unwrap().clone() {
        return ([(CONTENT_TYPE, content_type)], body).into_response();
    }

    let names = state.names.lock().unwrap().clone();
    let page_size = *state.page_size.lock().unwrap();
    let marker = query.get("marker").cloned().unwrap_or_default();
    let limit = query
        .get("limit")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(page_size);

    let page: Vec<String> = names
        .into_iter()
        .filter(|name| name.as_str() > marker.as_str())
        .take(limit.min(page_size))
        .collect();

    if query.get("format").map(String::as_str) == Some("json") {
        let entries: Vec<serde_json::Value> = page
            .iter()
            .map(|name| {
                serde_json::json!({
                    "name": name,
                    "count": 1,
                    "bytes": 100,
                    "last_modified": "2016-04-29T16:23:50.460230",
                })
            })
            .collect();
        return (
            [(CONTENT_TYPE, "application/json")],
            serde_json::Value::Array(entries).to_string(),
        )
            .into_response();
    }

    if page.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }
    (
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        page.join("\n") + "\n",
    )
        .into_response()
}

async fn container_handler(
    State(state): State<Arc<ServerState>>,
    method: Method,
    uri: Uri,
    Path((_account, container)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    record(&state, &method, &uri, &query, &headers);

    if let Some(status) = state
        .forced_statuses
        .lock()
        .unwrap()
        .get(&(method.to_string(), container.clone()))
        .copied()
    {
        return StatusCode::from_u16(status).unwrap().into_response();
    }

    match method.as_str() {
        "PUT" => StatusCode::CREATED.into_response(),
        "DELETE" | "POST" => StatusCode::NO_CONTENT.into_response(),
        "HEAD" => {
            let mut response_headers = HeaderMap::new();
            if let Some(entries) = state.container_headers.lock().unwrap().get(&container) {
                for (name, value) in entries {
                    response_headers.insert(
                        HeaderName::from_bytes(name.as_bytes()).unwrap(),
                        HeaderValue::from_str(value).unwrap(),
                    );
                }
            }
            (StatusCode::NO_CONTENT, response_headers).into_response()
        }
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}
