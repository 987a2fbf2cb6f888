//! In-process mock of the Ex-Online API.
//!
//! Each test starts its own server on a random port with one canned
//! response. The server records every request it sees and answers 401 to
//! any request without the expected bearer token.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode, Uri},
    Router,
};
use exonline_core::{Config, ExOnlineClient};

pub const API_KEY: &str = "test-key";
pub const BASE_PATH: &str = "/TagBrowser/api/v2/Puppy";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub accept: Option<String>,
    pub content_type: Option<String>,
}

struct MockState {
    status: StatusCode,
    body: String,
    requests: Mutex<Vec<Recorded>>,
}

pub struct MockServer {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockServer {
    /// Start a server that answers every authorized request with `status` and `body`.
    pub fn start(status: u16, body: impl Into<String>) -> Self {
        let state = Arc::new(MockState {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new().fallback(handle).with_state(state.clone());

        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                axum::serve(listener, app).await
            })
            .unwrap();
        });

        Self {
            base_url: format!("http://{addr}{BASE_PATH}"),
            state,
        }
    }

    pub fn start_json(body: serde_json::Value) -> Self {
        Self::start(200, body.to_string())
    }

    pub fn client(&self) -> ExOnlineClient {
        self.client_with_key(API_KEY)
    }

    pub fn client_with_key(&self, key: &str) -> ExOnlineClient {
        ExOnlineClient::new(&Config::new(key).with_base_url(&self.base_url)).unwrap()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("no request reached the mock server")
    }
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn handle(
    State(state): State<Arc<MockState>>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    let recorded = Recorded {
        path: uri.path().to_string(),
        query,
        authorization: header_str(&headers, header::AUTHORIZATION),
        accept: header_str(&headers, header::ACCEPT),
        content_type: header_str(&headers, header::CONTENT_TYPE),
    };
    let expected = format!("Bearer {API_KEY}");
    let authorized = recorded.authorization.as_deref() == Some(expected.as_str());
    state.requests.lock().unwrap().push(recorded);

    if !authorized {
        return (StatusCode::UNAUTHORIZED, r#"{"message":"invalid key"}"#.to_string());
    }
    (state.status, state.body.clone())
}
