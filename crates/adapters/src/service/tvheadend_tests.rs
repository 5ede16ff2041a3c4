// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

/// Serve exactly one HTTP response and hand back the raw request
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = std::thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);

        let mut request = String::new();
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                content_length = value.trim().parse().unwrap();
            }
            request.push_str(&line);
            if line == "\r\n" || line.is_empty() {
                break;
            }
        }
        let mut body_buf = vec![0u8; content_length];
        reader.read_exact(&mut body_buf).unwrap();
        request.push_str(&String::from_utf8_lossy(&body_buf));

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let mut stream = reader.into_inner();
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });

    (base_url, handle)
}

fn client(base_url: &str) -> TvheadendClient {
    TvheadendClient::new(
        base_url,
        &Credentials::new("relay", "secret"),
        Some(Duration::from_secs(10)),
    )
}

// =============================================================================
// Wire decoding
// =============================================================================

#[test]
fn authorization_is_basic_base64() {
    let credentials = Credentials::new("relay", "secret");
    assert_eq!(credentials.authorization(), "Basic cmVsYXk6c2VjcmV0");
}

#[test]
fn debug_redacts_password() {
    let credentials = Credentials::new("relay", "secret");
    let rendered = format!("{:?}", credentials);
    assert!(rendered.contains("relay"));
    assert!(!rendered.contains("secret"));
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    assert_eq!(
        client("http://tvh.local:9981/").base_url(),
        "http://tvh.local:9981"
    );
}

#[test]
fn decodes_upcoming_grid() {
    let body = r#"{
        "entries": [
            {"uuid": "a1", "disp_title": "Tatort", "enabled": true,
             "sched_status": "scheduled", "start_real": 1760000000},
            {"uuid": "b2", "title": {"ger": "Tagesschau"}, "enabled": false,
             "sched_status": "recording", "start_real": 1759990000}
        ],
        "total": 2
    }"#;

    let entries = decode_upcoming(body).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "a1");
    assert_eq!(entries[0].title, "Tatort");
    assert!(entries[0].enabled);
    assert_eq!(entries[0].status, EntryStatus::Idle);
    assert_eq!(entries[0].start.timestamp(), 1_760_000_000);
    assert_eq!(entries[1].title, "Tagesschau");
    assert_eq!(entries[1].status, EntryStatus::Recording);
}

#[test]
fn untitled_entry_falls_back_to_uuid() {
    let body = r#"{"entries": [{"uuid": "c3", "disp_title": "", "enabled": true,
        "sched_status": "scheduled", "start_real": 0}]}"#;
    assert_eq!(decode_upcoming(body).unwrap()[0].title, "c3");
}

#[test]
fn upcoming_without_entries_is_malformed() {
    assert!(decode_upcoming(r#"{"total": 0}"#).is_err());
    assert!(decode_upcoming("<html>login</html>").is_err());
}

#[test]
fn entry_missing_start_is_malformed() {
    let body = r#"{"entries": [{"uuid": "a", "enabled": true, "sched_status": "scheduled"}]}"#;
    assert!(decode_upcoming(body).is_err());
}

#[test]
fn decodes_tree_with_parent() {
    let parent = ParentRef::Node("adapter-1".to_string());
    let nodes = decode_tree(r#"[{"uuid": "fe-1", "text": "DVB-C #0"}, {"uuid": "fe-2"}]"#, &parent)
        .unwrap();

    assert_eq!(
        nodes,
        vec![
            DeviceNode::child("fe-1", "adapter-1"),
            DeviceNode::child("fe-2", "adapter-1"),
        ]
    );
}

#[test]
fn encodes_enabled_node_as_json() {
    let node: serde_json::Value =
        serde_json::from_str(&encode_enabled_node("fe-1", false)).unwrap();
    assert_eq!(node, serde_json::json!({"uuid": "fe-1", "enabled": false}));
}

// =============================================================================
// HTTP round trips against a local listener
// =============================================================================

#[tokio::test]
async fn upcoming_entries_sends_basic_auth() {
    let (base_url, server) = serve_once("200 OK", r#"{"entries": []}"#);

    let entries = client(&base_url).upcoming_entries().await.unwrap();
    let request = server.join().unwrap();

    assert!(entries.is_empty());
    assert!(request.starts_with("GET /api/dvr/entry/grid_upcoming "));
    assert!(request
        .to_ascii_lowercase()
        .contains("authorization: basic cmvsyxk6c2vjcmv0"));
}

#[tokio::test]
async fn device_tree_posts_parent_uuid_form() {
    let (base_url, server) = serve_once("200 OK", r#"[{"uuid": "adapter-1"}]"#);

    let nodes = client(&base_url)
        .device_tree(&ParentRef::Root)
        .await
        .unwrap();
    let request = server.join().unwrap();

    assert_eq!(nodes, vec![DeviceNode::root("adapter-1")]);
    assert!(request.starts_with("POST /api/hardware/tree "));
    assert!(request.ends_with("uuid=root"));
}

#[tokio::test]
async fn trigger_passes_settle_seconds() {
    let (base_url, server) = serve_once("200 OK", "{}");

    client(&base_url)
        .trigger_maintenance(Duration::from_secs(600))
        .await
        .unwrap();
    let request = server.join().unwrap();

    assert!(request.starts_with("GET /api/epggrab/ota/trigger?trigger=600 "));
}

#[tokio::test]
async fn http_error_status_is_reported() {
    let (base_url, server) = serve_once("401 Unauthorized", "");

    let err = client(&base_url)
        .set_device_enabled("fe-1", true)
        .await
        .unwrap_err();
    server.join().unwrap();

    assert!(matches!(
        err,
        ServiceError::Status { status: 401, .. }
    ));
}

#[tokio::test]
async fn malformed_body_is_reported() {
    let (base_url, server) = serve_once("200 OK", "not json");

    let err = client(&base_url).upcoming_entries().await.unwrap_err();
    server.join().unwrap();

    assert!(err.is_malformed());
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let err = client(&format!("http://127.0.0.1:{}", port))
        .upcoming_entries()
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Transport { .. }));
}
