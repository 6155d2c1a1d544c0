#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, Router};
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::util::ServiceExt;

use youandme_api::app_state::build_app_state_with;
use youandme_api::config::{AppConfig, LlmConfig};
use youandme_api::core::db::connect_writable;
use youandme_api::core::persistence::location::location_entity::LocationEntity;
use youandme_api::core::persistence::location::location_import::insert_locations;
use youandme_api::core::persistence::location::location_schema::ensure_schema;
use youandme_api::domain::location::service::friends_counter::FixedFriendsCounter;
use youandme_api::routes::app_router;

pub const FRIENDS: u8 = 3;
pub const ALLOWED_ORIGIN: &str = "https://www.re-bom.shop";

pub fn location(name: &str, latitude: f64, longitude: f64) -> LocationEntity {
    LocationEntity {
        name: name.to_string(),
        addr1: Some(format!("{} 도로명", name)),
        addr2: Some(format!("{} 지번", name)),
        latitude,
        longitude,
        phone: Some("02-1234-5678".into()),
    }
}

pub async fn seed_database(path: &Path, rows: &[LocationEntity]) {
    let pool = connect_writable(path).await.expect("open database");
    ensure_schema(&pool).await.expect("create schema");
    insert_locations(&pool, rows).await.expect("insert rows");
    pool.close().await;
}

pub fn test_config(database_path: PathBuf, llm_url: &str) -> AppConfig {
    AppConfig {
        server_addr: "127.0.0.1:0".into(),
        database_path,
        cors_origin: ALLOWED_ORIGIN.into(),
        log_dir: None,
        llm: LlmConfig {
            api_url: llm_url.to_string(),
            api_key: "sk-test-0123456789".into(),
            model: "gpt-4o".into(),
            prompt_template: "Create a {type_} feeling {emotion}. Voice: {voice_text}".into(),
            purpose: "Return JSON only.".into(),
            max_tokens: 1000,
            timeout: Duration::from_secs(5),
            max_retries: 0,
        },
    }
}

/// Router over a fresh database seeded with `rows`. Keep the `TempDir` alive for the test.
pub async fn app_with_locations(rows: &[LocationEntity]) -> (TempDir, Router) {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("database.db");
    seed_database(&db_path, rows).await;

    let app = app_for(test_config(db_path, "http://127.0.0.1:9/unused"));
    (dir, app)
}

pub fn app_for(config: AppConfig) -> Router {
    let state = build_app_state_with(config, Arc::new(FixedFriendsCounter(FRIENDS))).expect("state");
    app_router(state).expect("router")
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, post_request(uri, body.to_string())).await
}

pub fn post_request(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, json)
}
