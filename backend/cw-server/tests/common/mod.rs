#![allow(dead_code)]

//! Test infrastructure for cw-server API tests

use cw_core::{DomainAllowlist, ExtractionRule};
use cw_crawl::CrawlSettings;
use cw_crawl::testing::StaticSite;
use cw_db::{MemoryStore, SqliteStore, open_memory_pool};
use cw_server::AppState;
use cw_sync::SyncCoordinator;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const USER: &str = "user-1";
pub const CERT_URL: &str = "https://www.credential.net/3fa85f64-5717-4562-b3fc-2c963f66afa6";
pub const WALLET_URL: &str = "https://www.credential.net/profile/jdoe/wallet";
pub const CRED_A: &str = "https://www.credential.net/3fa85f64-5717-4562-b3fc-2c963f66afa6";
pub const CRED_B: &str = "https://verify.accredible.com/0f9e8d7c-6b5a-4938-8271-605f4e3d2c1b";

fn test_settings() -> CrawlSettings {
    CrawlSettings {
        navigation_timeout: Duration::from_secs(1),
        link_wait: Duration::from_millis(50),
        settle_delay: Duration::ZERO,
        network_idle: Duration::from_millis(10),
        session_timeout: Duration::from_millis(200),
    }
}

/// Create AppState backed by the fake site and an in-memory SQLite store
pub async fn create_test_app_state(site: &StaticSite) -> AppState {
    let pool = open_memory_pool()
        .await
        .expect("Failed to create test database");
    build_state(site, Arc::new(SqliteStore::new(pool)))
}

/// Create AppState backed by the in-process store
pub fn create_memory_app_state(site: &StaticSite) -> AppState {
    build_state(site, Arc::new(MemoryStore::new()))
}

fn build_state(site: &StaticSite, store: Arc<dyn cw_db::CredentialStore>) -> AppState {
    let rule = ExtractionRule::new(DomainAllowlist::default()).expect("default rule");
    let coordinator =
        SyncCoordinator::with_launcher(Arc::new(site.clone()), &test_settings(), rule, store);
    AppState::new(coordinator)
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send one request and decode the JSON response
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response: Response<Body> = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
