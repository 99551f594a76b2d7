//! Integration tests for glossary management against a mocked DeepL API

use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use deepl_translator::{ApiError, ClientOption, DeeplClient, DeeplError, GlossaryEntry, Language};

// ==================== Test Helpers ====================

const GLOSSARY_ID: &str = "def3a26b-3e84-45b3-84ae-0c0aaf3525f7";

fn client_for(server: &MockServer) -> DeeplClient {
    DeeplClient::new("an-auth-key", [ClientOption::base_url(server.uri())])
}

fn glossary_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "glossary_id": id,
        "name": name,
        "ready": true,
        "source_lang": "EN",
        "target_lang": "DE",
        "creation_time": "2021-08-03T14:16:18.329Z",
        "entry_count": 2
    })
}

fn entries() -> Vec<GlossaryEntry> {
    vec![
        GlossaryEntry::new("Hello", "Hallo"),
        GlossaryEntry::new("World", "Welt"),
    ]
}

// ==================== Create ====================

#[tokio::test]
async fn test_create_glossary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/glossaries"))
        .and(header("Authorization", "DeepL-Auth-Key an-auth-key"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(201).set_body_json(glossary_json(GLOSSARY_ID, "My Glossary")))
        .expect(1)
        .mount(&server)
        .await;

    let glossary = client_for(&server)
        .create_glossary("My Glossary", &Language::ENGLISH, &Language::GERMAN, &entries())
        .await
        .expect("Should succeed");

    assert_eq!(glossary.glossary_id, GLOSSARY_ID);
    assert_eq!(glossary.name, "My Glossary");
    assert!(glossary.ready);
    assert_eq!(glossary.entry_count, 2);

    let requests = server.received_requests().await.unwrap();
    let form: Vec<(String, String)> = url::form_urlencoded::parse(&requests[0].body)
        .into_owned()
        .collect();
    let field = |key: &str| {
        form.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };

    assert_eq!(field("name"), Some("My Glossary"));
    assert_eq!(field("source_lang"), Some("EN"));
    assert_eq!(field("target_lang"), Some("DE"));
    assert_eq!(field("entries_format"), Some("tsv"));
    assert_eq!(field("entries"), Some("Hello\tHallo\nWorld\tWelt"));
}

#[tokio::test]
async fn test_create_glossary_requires_created_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/glossaries"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string("{\"message\":\"Invalid glossary entries provided\"}\n"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_glossary("Broken", &Language::ENGLISH, &Language::GERMAN, &entries())
        .await
        .unwrap_err();

    assert_eq!(
        err.api_error(),
        Some(&ApiError::with_body(
            400,
            "{\"message\":\"Invalid glossary entries provided\"}\n"
        ))
    );
    assert_eq!(
        err.to_string(),
        "unexpected HTTP status Bad Request ({\"message\":\"Invalid glossary entries provided\"})"
    );
}

// ==================== Read ====================

#[tokio::test]
async fn test_list_glossaries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/glossaries"))
        .and(header("Authorization", "DeepL-Auth-Key an-auth-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "glossaries": [
                glossary_json("first", "First"),
                glossary_json("second", "Second")
            ]
        })))
        .mount(&server)
        .await;

    let glossaries = client_for(&server)
        .list_glossaries()
        .await
        .expect("Should succeed");

    let ids: Vec<&str> = glossaries.iter().map(|g| g.glossary_id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second"]);
}

#[tokio::test]
async fn test_get_glossary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/glossaries/{}", GLOSSARY_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(glossary_json(GLOSSARY_ID, "My Glossary")))
        .mount(&server)
        .await;

    let glossary = client_for(&server)
        .get_glossary(GLOSSARY_ID)
        .await
        .expect("Should succeed");

    assert_eq!(glossary.source_lang, Language::ENGLISH);
    assert_eq!(glossary.target_lang, Language::GERMAN);
}

#[tokio::test]
async fn test_get_missing_glossary_keeps_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/glossaries/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{\"message\":\"Glossary not found\"}"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_glossary("missing")
        .await
        .unwrap_err();

    let api = err.api_error().expect("remote rejection");
    assert_eq!(api.code, 404);
    assert_eq!(api.body.as_deref(), Some("{\"message\":\"Glossary not found\"}"));
    assert_eq!(
        err.to_string(),
        "unexpected HTTP status Not Found ({\"message\":\"Glossary not found\"})"
    );
}

#[tokio::test]
async fn test_get_glossary_with_invalid_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/glossaries/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"glossary_id\":"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_glossary("abc").await.unwrap_err();
    assert!(matches!(err, DeeplError::Decode(_)));
}

#[tokio::test]
async fn test_list_glossary_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/glossaries/{}/entries", GLOSSARY_ID)))
        .and(header("Accept", "text/tab-separated-values"))
        .and(header("Authorization", "DeepL-Auth-Key an-auth-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Hello\tHallo\nWorld\tWelt\n"))
        .mount(&server)
        .await;

    let decoded = client_for(&server)
        .list_glossary_entries(GLOSSARY_ID)
        .await
        .expect("Should succeed");

    assert_eq!(decoded, entries());
}

#[tokio::test]
async fn test_malformed_entries_abort_the_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/glossaries/abc/entries"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Hello\tHallo\nbroken line\nWorld\tWelt"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_glossary_entries("abc")
        .await
        .unwrap_err();

    match err {
        DeeplError::MalformedEntry(entry) => {
            assert_eq!(entry.line_number, 2);
            assert_eq!(entry.line, "broken line");
        }
        other => panic!("expected malformed entry, got {:?}", other),
    }
}

#[tokio::test]
async fn test_entries_with_invalid_utf8_are_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/glossaries/abc/entries"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"caf\xe9\tKaffee".to_vec()))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_glossary_entries("abc")
        .await
        .unwrap_err();

    assert!(matches!(err, DeeplError::InvalidUtf8(_)), "got {:?}", err);
}

// ==================== Delete ====================

#[tokio::test]
async fn test_delete_glossary() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/glossaries/{}", GLOSSARY_ID)))
        .and(header("Authorization", "DeepL-Auth-Key an-auth-key"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .delete_glossary(GLOSSARY_ID)
        .await
        .expect("Should succeed");
}

#[tokio::test]
async fn test_delete_glossary_requires_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/glossaries/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let err = client_for(&server).delete_glossary("abc").await.unwrap_err();

    assert_eq!(err.api_error(), Some(&ApiError::with_body(200, "ok")));
}

#[tokio::test]
async fn test_glossary_error_codes_keep_code() {
    for code in [400u16, 401, 403, 404, 413, 429, 456, 503] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/glossaries"))
            .respond_with(ResponseTemplate::new(code))
            .mount(&server)
            .await;

        let err = client_for(&server).list_glossaries().await.unwrap_err();
        let api = err.api_error().expect("remote rejection");

        assert_eq!(api.code, code);
        assert_eq!(api.is_quota_exceeded(), code == 456);
    }
}

/// Serve one response whose body is shorter than its Content-Length
async fn truncated_response_server(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: 100\r\n\r\nshort",
            status_line
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_rejection_with_unreadable_body_keeps_code() {
    let base_url = truncated_response_server("456 Quota Exceeded").await;
    let transport = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client builds");
    let client = DeeplClient::new(
        "an-auth-key",
        [
            ClientOption::base_url(base_url),
            ClientOption::transport(transport),
        ],
    );

    let err = client.list_glossaries().await.unwrap_err();

    assert_eq!(err.api_error(), Some(&ApiError::new(456)));
    assert!(err.api_error().unwrap().is_quota_exceeded());
}
