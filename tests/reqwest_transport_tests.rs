//! End-to-end tests through the reqwest transport against wiremock servers

mod common;

use common::TABLE;
use std::collections::HashMap;
use std::time::Duration;
use typed_fetch::{
    fetch, ClientConfig, HttpErrorKind, Method, RequestError, RequestOptions, ReqwestTransport,
    TypedFetch,
};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher(config: ClientConfig) -> TypedFetch<ReqwestTransport> {
    TypedFetch::new(ReqwestTransport::new(config).unwrap())
}

#[tokio::test]
async fn test_success_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 1})))
        .mount(&server)
        .await;

    let mut response = fetcher(ClientConfig::default())
        .execute::<serde_json::Value>(&format!("{}/users/1", server.uri()), RequestOptions::get())
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.status_text(), "OK");
    assert!(response.url().is_some());
    assert_eq!(response.json().unwrap()["id"], 1);
}

#[tokio::test]
async fn test_classified_statuses_from_server() {
    let server = MockServer::start().await;
    for (status, _) in TABLE {
        Mock::given(path(format!("/status/{}", status)))
            .respond_with(ResponseTemplate::new(status).set_body_string("failure body"))
            .mount(&server)
            .await;
    }

    let fetcher = fetcher(ClientConfig::default());
    for (status, status_text) in TABLE {
        let result = fetcher
            .execute::<()>(&format!("{}/status/{}", server.uri(), status), RequestOptions::get())
            .await;

        match result {
            Err(RequestError::Http(mut error)) => {
                assert_eq!(error.status(), status);
                assert_eq!(error.status_text(), status_text);
                assert_eq!(error.response().status(), status);
                assert_eq!(error.text().unwrap(), "failure body");
            }
            other => panic!("status {} not classified: {:?}", status, other),
        }
    }
}

#[tokio::test]
async fn test_unclassified_status_passes_through() {
    let server = MockServer::start().await;
    Mock::given(path("/expired"))
        .respond_with(ResponseTemplate::new(419))
        .mount(&server)
        .await;

    let response = fetcher(ClientConfig::default())
        .execute::<()>(&format!("{}/expired", server.uri()), RequestOptions::get())
        .await
        .unwrap();

    assert_eq!(response.status(), 419);
    assert!(!response.ok());
}

#[tokio::test]
async fn test_request_options_reach_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items"))
        .and(header("content-type", "application/json"))
        .and(header("x-trace", "abc"))
        .and(body_string(r#"{"name":"widget"}"#))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::new()
        .method(Method::POST)
        .header("X-Trace", "abc")
        .json(&serde_json::json!({"name": "widget"}))
        .unwrap();

    let response = fetcher(ClientConfig::default())
        .execute::<()>(&format!("{}/items", server.uri()), options)
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn test_default_headers_from_config() {
    let server = MockServer::start().await;
    Mock::given(header("x-client-id", "config-client"))
        .and(header("user-agent", "typed-fetch-test"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig {
        user_agent: Some("typed-fetch-test".to_string()),
        headers: Some(HashMap::from([(
            "X-Client-Id".to_string(),
            "config-client".to_string(),
        )])),
        ..ClientConfig::default()
    };

    let response = fetcher(config)
        .execute::<()>(&server.uri(), RequestOptions::get())
        .await
        .unwrap();
    assert_eq!(response.status(), 204);
}

#[tokio::test]
async fn test_timeout_becomes_network_error() {
    let server = MockServer::start().await;
    Mock::given(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let options = RequestOptions::get().timeout(Duration::from_millis(100));
    let error = fetcher(ClientConfig::default())
        .execute::<()>(&format!("{}/slow", server.uri()), options)
        .await
        .unwrap_err();

    assert!(error.is_network());
    assert!(!error.as_network().unwrap().message().is_empty());
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let error = fetcher(ClientConfig::default())
        .execute::<()>("http://127.0.0.1:1/", RequestOptions::get())
        .await
        .unwrap_err();

    assert!(error.is_network());
    assert!(error.kind().is_none());
}

#[tokio::test]
async fn test_free_fetch_function() {
    let server = MockServer::start().await;
    Mock::given(path("/teapot"))
        .respond_with(ResponseTemplate::new(418))
        .mount(&server)
        .await;

    let error = fetch::<()>(&format!("{}/teapot", server.uri()), RequestOptions::get())
        .await
        .unwrap_err();
    assert_eq!(error.kind(), Some(HttpErrorKind::ImATeapot));
}
