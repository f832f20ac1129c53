//! In-process stand-in for the statistics API, used by tests.

use async_trait::async_trait;
use axum::{http::StatusCode, routing::get, Json, Router};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::api::{
    AffordablePlace, BlockValue, FetchError, FetchResult, PropertyTypeStat, ReportSource,
};

/// A canned response for one path
pub struct MockRoute {
    pub path: &'static str,
    pub status: StatusCode,
    pub body: serde_json::Value,
}

impl MockRoute {
    pub fn new(path: &'static str, status: StatusCode, body: serde_json::Value) -> Self {
        Self { path, status, body }
    }

    pub fn ok(path: &'static str, body: serde_json::Value) -> Self {
        Self::new(path, StatusCode::OK, body)
    }
}

/// A running mock API. The server stops when this is dropped.
pub struct MockApi {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl MockApi {
    /// Total requests served across all routes
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub async fn spawn_mock_api(routes: Vec<MockRoute>) -> MockApi {
    let hits = Arc::new(AtomicUsize::new(0));
    let mut router = Router::new();

    for route in routes {
        let hits = Arc::clone(&hits);
        let status = route.status;
        let body = route.body;
        router = router.route(
            route.path,
            get(move || {
                let hits = Arc::clone(&hits);
                let body = body.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    (status, Json(body))
                }
            }),
        );
    }

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    MockApi {
        base_url: format!("http://{}", addr),
        hits,
        handle,
    }
}

/// Base URL of a port nothing is listening on
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Report source returning canned records and counting calls
#[derive(Default)]
pub struct FakeSource {
    pub places: Vec<AffordablePlace>,
    pub property_types: Vec<PropertyTypeStat>,
    pub blocks: Vec<BlockValue>,
    /// When set, every call fails with this message
    pub fail_with: Option<String>,
    pub(crate) calls: AtomicUsize,
}

impl FakeSource {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond<T: Clone>(&self, records: &[T]) -> FetchResult<Vec<T>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(msg) => Err(FetchError::FetchFailed(msg.clone())),
            None => Ok(records.to_vec()),
        }
    }
}

#[async_trait]
impl ReportSource for FakeSource {
    async fn top_affordable_places(&self) -> FetchResult<Vec<AffordablePlace>> {
        self.respond(&self.places)
    }

    async fn property_type_comparison(&self) -> FetchResult<Vec<PropertyTypeStat>> {
        self.respond(&self.property_types)
    }

    async fn block_values(&self) -> FetchResult<Vec<BlockValue>> {
        self.respond(&self.blocks)
    }
}
