mod common;

use http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{app_for, post_json, test_config};

const CHAT_PATH: &str = "/v1/chat/completions";

fn request_body() -> Value {
    json!({
        "type": "poem",
        "emotion": "calm",
        "voice_text": "the sea at night",
        "image_url": "https://img.example.com/sea.png"
    })
}

fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

fn app_against(server: &MockServer, max_retries: u32) -> (tempfile::TempDir, axum::Router) {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(
        dir.path().join("database.db"),
        &format!("{}{}", server.uri(), CHAT_PATH),
    );
    config.llm.max_retries = max_retries;
    (dir, app_for(config))
}

#[tokio::test]
async fn fenced_reply_is_unwrapped_into_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(header("authorization", "Bearer sk-test-0123456789"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "max_tokens": 1000,
            "messages": [
                {"role": "system", "content": "Return JSON only."},
                {"role": "system", "content": "image_url: https://img.example.com/sea.png, detail: high"},
                {"role": "user", "content": "Create a poem feeling calm. Voice: the sea at night"}
            ]
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("```json\n{\"title\": \"밤바다\", \"lines\": 4}\n```")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, app) = app_against(&server, 0);
    let (status, body) = post_json(&app, "/api/v1/image-processing", request_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": {"title": "밤바다", "lines": 4}}));
}

#[tokio::test]
async fn unfenced_reply_is_parsed_as_is() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("{\"ok\": true}")))
        .mount(&server)
        .await;

    let (_dir, app) = app_against(&server, 0);
    let (status, body) = post_json(&app, "/api/v1/image-processing", request_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!({"ok": true}));
}

#[tokio::test]
async fn upstream_error_status_is_a_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let (_dir, app) = app_against(&server, 0);
    let (status, body) = post_json(&app, "/api/v1/image-processing", request_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to communicate with OpenAI API");
    assert!(body["details"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_failure() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_for(test_config(
        dir.path().join("database.db"),
        "http://127.0.0.1:9/v1/chat/completions",
    ));

    let (status, body) = post_json(&app, "/api/v1/image-processing", request_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to communicate with OpenAI API");
    assert!(!body["details"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn empty_choices_is_a_structural_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let (_dir, app) = app_against(&server, 0);
    let (status, body) = post_json(&app, "/api/v1/image-processing", request_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Unexpected response structure from OpenAI API");
}

#[tokio::test]
async fn non_json_reply_is_a_parse_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion("Sorry, I can't describe that image.")),
        )
        .mount(&server)
        .await;

    let (_dir, app) = app_against(&server, 0);
    let (status, body) = post_json(&app, "/api/v1/image-processing", request_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to parse response from OpenAI API");
    assert!(!body["details"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn retry_recovers_from_a_single_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("{\"retried\": true}")))
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, app) = app_against(&server, 1);
    let (status, body) = post_json(&app, "/api/v1/image-processing", request_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!({"retried": true}));
}

#[tokio::test]
async fn no_retry_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, app) = app_against(&server, 0);
    let (status, _) = post_json(&app, "/api/v1/image-processing", request_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn missing_field_never_reaches_the_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("{}")))
        .expect(0)
        .mount(&server)
        .await;

    let (_dir, app) = app_against(&server, 0);
    let mut body = request_body();
    body.as_object_mut().unwrap().remove("image_url");

    let (status, resp) = post_json(&app, "/api/v1/image-processing", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "Invalid request");
    assert!(resp["details"].as_str().unwrap().contains("image_url"));
}
