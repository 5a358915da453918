//! Edge-function engine against a mock HTTP server

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

mod common;

use code_translator_engine::{EngineError, TranslateRequest};
use mockito::{Matcher, Server};
use serde_json::json;

use common::function_engine;

const PATH: &str = "/functions/v1/translate-code";

fn sample_request() -> TranslateRequest {
    TranslateRequest::new("python", "javascript", "print('hi')")
}

#[tokio::test]
async fn sends_wire_body_and_auth_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("authorization", "Bearer anon-key")
        .match_header("apikey", "anon-key")
        .match_body(Matcher::Json(json!({
            "sourceLang": "python",
            "targetLang": "javascript",
            "code": "print('hi')"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"translatedCode":"console.log('hi');"}"#)
        .create_async()
        .await;

    let engine = function_engine(&server.url(), Some("anon-key"), 0);
    let response = require_ok!(engine.translate(&sample_request()).await);

    assert_eq!(response.translated_code, "console.log('hi');");
    mock.assert_async().await;
}

#[tokio::test]
async fn translated_text_is_not_trimmed() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(r#"{"translatedCode":"\n  let x = 1;\n\n"}"#)
        .create_async()
        .await;

    let engine = function_engine(&server.url(), None, 0);
    let response = require_ok!(engine.translate(&sample_request()).await);

    assert_eq!(response.translated_code, "\n  let x = 1;\n\n");
}

#[tokio::test]
async fn remote_error_message_is_kept() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(400)
        .with_body(r#"{"error":"Unsupported language pair"}"#)
        .create_async()
        .await;

    let engine = function_engine(&server.url(), None, 0);
    let err = require_err!(engine.translate(&sample_request()).await);

    assert!(matches!(err, EngineError::RemoteError { status: 400, .. }));
    assert_eq!(err.remote_message(), Some("Unsupported language pair"));
}

#[tokio::test]
async fn error_body_with_success_status_is_a_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(r#"{"error":"Model overloaded"}"#)
        .create_async()
        .await;

    let engine = function_engine(&server.url(), None, 0);
    let err = require_err!(engine.translate(&sample_request()).await);

    assert_eq!(err.remote_message(), Some("Model overloaded"));
}

#[tokio::test]
async fn status_message_beside_translation_is_ignored() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(r#"{"translatedCode":"console.log(1)","message":"ok"}"#)
        .create_async()
        .await;

    let engine = function_engine(&server.url(), None, 0);
    let response = require_ok!(engine.translate(&sample_request()).await);

    assert_eq!(response.translated_code, "console.log(1)");
}

#[tokio::test]
async fn body_with_error_and_message_keeps_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(422)
        .with_body(r#"{"error":"Unsupported language pair","message":"Unprocessable"}"#)
        .create_async()
        .await;

    let engine = function_engine(&server.url(), None, 0);
    let err = require_err!(engine.translate(&sample_request()).await);

    assert!(matches!(err, EngineError::RemoteError { status: 422, .. }));
    assert_eq!(err.remote_message(), Some("Unsupported language pair"));
}

#[tokio::test]
async fn missing_translation_is_empty_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let engine = function_engine(&server.url(), None, 0);
    let err = require_err!(engine.translate(&sample_request()).await);

    assert!(matches!(err, EngineError::EmptyResponse { .. }));
    assert_eq!(err.remote_message(), None);
}

#[tokio::test]
async fn unauthorized_is_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .with_status(401)
        .with_body(r#"{"message":"Invalid JWT"}"#)
        .expect(1)
        .create_async()
        .await;

    let engine = function_engine(&server.url(), Some("bad"), 3);
    let err = require_err!(engine.translate(&sample_request()).await);

    assert!(matches!(err, EngineError::Unauthorized { .. }));
    assert_eq!(err.remote_message(), Some("Invalid JWT"));
    mock.assert_async().await;
}

#[tokio::test]
async fn gateway_errors_are_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .with_status(503)
        .with_body("upstream unavailable")
        .expect(2)
        .create_async()
        .await;

    let engine = function_engine(&server.url(), None, 1);
    let err = require_err!(engine.translate(&sample_request()).await);

    assert!(err.is_transport());
    mock.assert_async().await;
}

#[tokio::test]
async fn connection_refused_is_transport_fault() {
    // nothing listens on port 1
    let engine = function_engine("http://127.0.0.1:1", None, 0);
    let err = require_err!(engine.translate(&sample_request()).await);

    assert!(matches!(err, EngineError::NetworkError { .. }));
    assert_eq!(err.remote_message(), None);
}
