//! Tests for the image bed operations

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use serde_json::json;
use std::io::Write;
use std::time::Duration;
use test_case::test_case;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> QiniuClient {
    let config = ClientConfig::builder()
        .base_url(format!("{}/api", server.uri()))
        .build();
    QiniuClient::new(config).unwrap()
}

// ============================================================================
// Key generation
// ============================================================================

#[test_case("photo.png", "bed/1700000000000.png" ; "simple extension")]
#[test_case("archive.tar.gz", "bed/1700000000000.gz" ; "last segment wins")]
#[test_case("README", "bed/1700000000000.README" ; "no dot uses whole name")]
#[test_case("trailing.", "bed/1700000000000." ; "trailing dot gives empty extension")]
#[test_case(".bashrc", "bed/1700000000000.bashrc" ; "leading dot")]
#[test_case("a.P N?G", "bed/1700000000000.P N?G" ; "extension used verbatim")]
fn test_generate_key_at(name: &str, expected: &str) {
    assert_eq!(generate_key_at(name, 1_700_000_000_000), expected);
}

#[test]
fn test_generate_key_format() {
    let key = generate_key("photo.png");
    let rest = key.strip_prefix(KEY_PREFIX).unwrap();
    let (millis, ext) = rest.split_once('.').unwrap();
    assert_eq!(ext, "png");
    assert!(!millis.is_empty());
    assert!(millis.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_keys_differ_across_timestamps() {
    let a = generate_key_at("photo.png", 1_700_000_000_000);
    let b = generate_key_at("photo.png", 1_700_000_000_001);
    assert_ne!(a, b);
}

#[test]
fn test_keys_collide_within_same_millisecond() {
    let a = generate_key_at("one.png", 42);
    let b = generate_key_at("two.png", 42);
    assert_eq!(a, b);
}

#[test]
fn test_generate_key_uses_wall_clock() {
    let before = chrono::Utc::now().timestamp_millis();
    let key = generate_key("x.jpg");
    let after = chrono::Utc::now().timestamp_millis();

    let millis: i64 = key
        .trim_start_matches(KEY_PREFIX)
        .trim_end_matches(".jpg")
        .parse()
        .unwrap();
    assert!(millis >= before && millis <= after);
}

// ============================================================================
// UploadFile
// ============================================================================

#[test]
fn test_upload_file_accessors() {
    let file = UploadFile::new("a.txt", b"0123456789".to_vec());
    assert_eq!(file.name(), "a.txt");
    assert_eq!(file.len(), 10);
    assert!(!file.is_empty());
    assert!(file.key().ends_with(".txt"));
}

#[test_case("photo.png", "image/png" ; "png")]
#[test_case("scan.JPG", "image/jpeg" ; "upper case jpeg")]
#[test_case("a.txt", "text/plain" ; "text")]
#[test_case("README", "application/octet-stream" ; "no extension")]
#[test_case("blob.zzqx", "application/octet-stream" ; "unknown extension")]
fn test_upload_file_mime_from_name(name: &str, expected: &str) {
    assert_eq!(UploadFile::new(name, Vec::new()).mime(), expected);
}

#[test]
fn test_upload_file_explicit_mime() {
    let file = UploadFile::new("clip", b"x".to_vec()).with_mime("video/mp4");
    assert_eq!(file.mime(), "video/mp4");
}

#[tokio::test]
async fn test_upload_file_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("notes.md");
    let mut f = std::fs::File::create(&file_path).unwrap();
    f.write_all(b"# notes").unwrap();

    let file = UploadFile::from_path(&file_path).await.unwrap();
    assert_eq!(file.name(), "notes.md");
    assert_eq!(file.data().as_ref(), b"# notes");
}

#[tokio::test]
async fn test_upload_file_from_missing_path() {
    let err = UploadFile::from_path("/nonexistent/file.png")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

// ============================================================================
// Remote operations
// ============================================================================

#[tokio::test]
async fn test_request_upload_token_plain() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/qiniu/upload-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ak:sig:policy"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let token = client.request_upload_token().await.unwrap();
    assert_eq!(token, "ak:sig:policy");
}

#[tokio::test]
async fn test_request_upload_token_json_string() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/qiniu/upload-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("ak:sig:policy")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(client.request_upload_token().await.unwrap(), "ak:sig:policy");
}

#[tokio::test]
async fn test_upload_file_sends_one_multipart_part() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/qiniu/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key": "bed/1700000000000.txt",
            "url": "http://cdn.example.com/bed/1700000000000.txt"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let file = UploadFile::new("a.txt", b"0123456789".to_vec());
    let result = client.upload_file(file).await.unwrap();

    assert_eq!(result.status, 200);
    assert_eq!(result.body["key"], "bed/1700000000000.txt");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let content_type = requests[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&requests[0].body).to_lowercase();
    assert_eq!(body.matches("content-disposition").count(), 1);
    assert!(body.contains(r#"name="file""#));
    assert!(body.contains(r#"filename="a.txt""#));
    assert!(body.contains("0123456789"));
}

#[tokio::test]
async fn test_upload_part_carries_image_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/qiniu/upload"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .upload_file(UploadFile::new("photo.png", vec![0x89, b'P', b'N', b'G']))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body).to_lowercase();
    assert!(body.contains("content-type: image/png"));
    assert!(!body.contains("application/octet-stream"));
}

#[tokio::test]
async fn test_delete_file_sends_configured_session_cookie() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/qiniu/bed/123.png"))
        .and(header("cookie", "JSESSIONID=logged-in"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(format!("{}/api", mock_server.uri()))
        .cookie("JSESSIONID=logged-in")
        .build();
    let client = QiniuClient::new(config).unwrap();

    let result = client.delete_file("bed/123.png").await.unwrap();
    assert_eq!(result.body, json!("ok"));
}

#[tokio::test]
async fn test_delete_file_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/qiniu/bed/123.png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.delete_file("bed/123.png").await.unwrap();

    assert_eq!(result.body, json!({"deleted": true}));
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_file_empty_key() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let err = client.delete_file("").await.unwrap_err();
    assert!(matches!(err, Error::InvalidKey { .. }));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_file_server_rejects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/qiniu/bed/123.png"))
        .respond_with(ResponseTemplate::new(401).set_body_string("login required"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.delete_file("bed/123.png").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().contains("login required"));
}

#[tokio::test]
async fn test_fetch_domain() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/qiniu/domain"))
        .respond_with(ResponseTemplate::new(200).set_body_string("http://cdn.example.com"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert_eq!(
        client.fetch_domain().await.unwrap(),
        "http://cdn.example.com"
    );
}

#[tokio::test]
async fn test_unreachable_server_rejects() {
    let config = ClientConfig::builder()
        .base_url("http://127.0.0.1:1/api")
        .timeout(Duration::from_secs(5))
        .build();
    let client = QiniuClient::new(config).unwrap();

    let err = client.fetch_domain().await.unwrap_err();
    assert!(err.is_transport());

    let err = client
        .upload_file(UploadFile::new("a.txt", b"x".to_vec()))
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_file_host_trait_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/qiniu/domain"))
        .respond_with(ResponseTemplate::new(200).set_body_string("cdn.example.com"))
        .mount(&mock_server)
        .await;

    let host: Box<dyn FileHost> = Box::new(client_for(&mock_server));
    assert_eq!(host.fetch_domain().await.unwrap(), "cdn.example.com");
}
