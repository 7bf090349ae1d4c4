use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use sitechat_engine::{Backend, BackendError, BackendSettings, QueryAnswer, ReqwestBackend};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> ReqwestBackend {
    let settings = BackendSettings {
        base_url: server.uri(),
        ..BackendSettings::default()
    };
    ReqwestBackend::new(settings).expect("build backend")
}

#[tokio::test]
async fn ingest_posts_url_to_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/scrape/"))
        .and(body_json(json!({ "url": "https://example.com" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Scraping and vector creation successful" })),
        )
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    backend.ingest("https://example.com").await.expect("ingest ok");
}

#[tokio::test]
async fn ingest_maps_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/scrape/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend.ingest("https://example.com").await.unwrap_err();
    assert_eq!(err, BackendError::HttpStatus(500));
}

#[tokio::test]
async fn ask_returns_answer_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/ask/"))
        .and(body_json(json!({ "question": "What is this page about?" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "intent": "question",
            "answer": "It's a demo site.",
        })))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let answer = backend
        .ask("What is this page about?")
        .await
        .expect("ask ok");
    assert_eq!(
        answer,
        QueryAnswer {
            answer: Some("It's a demo site.".to_string()),
        }
    );
}

#[tokio::test]
async fn ask_without_answer_field_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/ask/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "intent": "smalltalk" })))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let answer = backend.ask("hello").await.expect("ask ok");
    assert_eq!(answer, QueryAnswer { answer: None });
}

#[tokio::test]
async fn ask_maps_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/ask/"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend.ask("anything?").await.unwrap_err();
    assert_eq!(err, BackendError::HttpStatus(400));
}

#[tokio::test]
async fn ask_times_out_on_slow_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/ask/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "answer": "slow" })),
        )
        .mount(&server)
        .await;

    let settings = BackendSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..BackendSettings::default()
    };
    let backend = ReqwestBackend::new(settings).expect("build backend");
    let err = backend.ask("anything?").await.unwrap_err();
    assert_eq!(err, BackendError::Timeout);
}

#[tokio::test]
async fn ask_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/ask/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "text/plain"))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend.ask("anything?").await.unwrap_err();
    assert!(matches!(err, BackendError::InvalidResponse(_)));
}
