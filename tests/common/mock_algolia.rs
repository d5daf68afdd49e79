//! Mock Algolia search endpoint.

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured `(query, page)` pair, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedSearch {
    pub query: String,
    pub page: String,
}

/// A canned response for one `(query, page)`.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    /// 200 with the given hits and page.
    pub fn hits(hits: &[(&str, &str, &str, u32, i64)], page: u32) -> Self {
        let hits: Vec<_> = hits
            .iter()
            .map(|(id, title, author, comments, points)| {
                json!({
                    "objectID": id,
                    "title": title,
                    "url": format!("https://example.com/{id}"),
                    "author": author,
                    "num_comments": comments,
                    "points": points,
                })
            })
            .collect();
        Self {
            status: 200,
            body: json!({ "hits": hits, "page": page, "nbPages": 10 }).to_string(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"message": "mock failure"}"#.to_string(),
            delay_ms: 0,
        }
    }

    pub fn raw(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn delayed(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

#[derive(Clone, Default)]
struct MockState {
    responses: Arc<Mutex<HashMap<(String, String), MockResponse>>>,
    captured: Arc<Mutex<Vec<CapturedSearch>>>,
}

/// Serves `/api/v1/search`.
///
/// Unregistered searches answer with two hits whose ids are
/// `<query>-<page>-0` and `<query>-<page>-1`.
pub struct MockAlgolia {
    addr: SocketAddr,
    state: MockState,
}

impl MockAlgolia {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new()
            .route("/api/v1/search", get(search))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self { addr, state }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub async fn respond(&self, query: &str, page: u32, response: MockResponse) {
        self.state
            .responses
            .lock()
            .await
            .insert((query.to_string(), page.to_string()), response);
    }

    pub async fn captured(&self) -> Vec<CapturedSearch> {
        self.state.captured.lock().await.clone()
    }
}

async fn search(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let query = params.get("query").cloned().unwrap_or_default();
    let page = params.get("page").cloned().unwrap_or_default();
    state.captured.lock().await.push(CapturedSearch {
        query: query.clone(),
        page: page.clone(),
    });

    let canned = state
        .responses
        .lock()
        .await
        .get(&(query.clone(), page.clone()))
        .cloned();

    let response = canned.unwrap_or_else(|| {
        let page_num: u32 = page.parse().unwrap_or(0);
        let id0 = format!("{query}-{page}-0");
        let id1 = format!("{query}-{page}-1");
        MockResponse::hits(
            &[
                (id0.as_str(), "First", "alice", 1, 10),
                (id1.as_str(), "Second", "bob", 2, 20),
            ],
            page_num,
        )
    });

    if response.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(response.delay_ms)).await;
    }

    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response()
}
