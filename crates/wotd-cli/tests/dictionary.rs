//! Wordnik adapter against a mock server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wotd_cli::dictionary::{DictionaryAdapter, DictionaryError, WordnikAdapter};
use wotd_common_http::HttpClient;

async fn adapter(server: &MockServer) -> WordnikAdapter {
    WordnikAdapter::new(HttpClient::new().unwrap(), "test-key").with_base_url(server.uri())
}

#[tokio::test]
async fn test_fetch_definitions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/word.json/serendipity/definitions"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("limit", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"text": "The faculty of making fortunate discoveries by accident.", "partOfSpeech": "noun"},
            {"partOfSpeech": "noun"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = adapter(&server).await;
    let response = adapter.fetch_word_data("serendipity").await.unwrap();

    assert_eq!(response.word, "serendipity");
    assert_eq!(response.definitions.len(), 2);
    assert_eq!(response.definitions[1].text(), None);

    let entry = adapter.to_word_entry(response, "20240101", false);
    assert_eq!(entry.adapter, "wordnik");
    assert_eq!(entry.data.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_missing_word_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/word.json/qwzx/definitions"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let err = adapter(&server).await.fetch_word_data("qwzx").await.unwrap_err();
    assert!(matches!(err, DictionaryError::NotFound { ref word } if word == "qwzx"));
}

#[tokio::test]
async fn test_definitions_without_text_are_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/word.json/blank/definitions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"text": "  "}])))
        .mount(&server)
        .await;

    let err = adapter(&server).await.fetch_word_data("blank").await.unwrap_err();
    assert!(matches!(err, DictionaryError::NotFound { .. }));
}

#[tokio::test]
async fn test_server_error_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = adapter(&server).await.fetch_word_data("word").await.unwrap_err();
    assert!(matches!(err, DictionaryError::Http(_)));
}
