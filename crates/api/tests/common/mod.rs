//! Common test utilities for integration tests.
//!
//! Tests run the full router against an in-memory event log, so no Google
//! account is needed.

// Not every test file uses every helper.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use persistence::{MemoryStore, SheetsConfig};
use serde_json::Value;
use std::sync::Arc;
use wardrobe_ledger_api::{
    app::create_app,
    config::{Config, LoggingConfig, ServerConfig, StoreConfig, StoreKind},
};

pub const HEADER: [&str; 7] = ["時間", "姓名", "學號", "動作", "服裝名稱", "數量", "備註"];

/// Test configuration backed by the memory store.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Use random port
            request_timeout_secs: 30,
            cors_origins: vec![],
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        store: StoreConfig {
            kind: StoreKind::Memory,
        },
        sheet: SheetsConfig::default(),
    }
}

/// Create a test application router over `store`.
pub fn create_test_app(store: Arc<MemoryStore>) -> Router {
    create_app(test_config(), store)
}

/// One sheet row from string cells.
pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// A store holding the canonical header followed by `rows`.
pub fn seeded_store(rows: &[&[&str]]) -> Arc<MemoryStore> {
    let mut grid = vec![row(&HEADER)];
    grid.extend(rows.iter().map(|r| row(r)));
    Arc::new(MemoryStore::with_rows(grid))
}

/// Helper to create a JSON request.
pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Helper to create a body-less GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Helper to parse JSON response body.
pub async fn parse_response_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}
