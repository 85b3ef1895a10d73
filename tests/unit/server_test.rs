//! Tests for the tiny_http adapter over a real socket

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use todos::adapters::memory::MemoryTodoRepository;
use todos::server::TodoServer;

/// Start a server on an ephemeral port and return its address
fn start() -> SocketAddr {
    let server = TodoServer::bind("127.0.0.1:0", Arc::new(MemoryTodoRepository::new())).unwrap();
    let addr = server.local_addr().expect("server has an IP address");
    thread::spawn(move || server.run());
    addr
}

/// Send a raw HTTP/1.1 request and return (status, headers, body)
fn request(addr: SocketAddr, method: &str, path: &str, body: &str) -> (u16, String, String) {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();

    let raw = format!(
        "{method} {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\
         Content-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(raw.as_bytes()).unwrap();

    let mut response = Vec::new();
    let mut chunk = [0_u8; 4096];
    loop {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => response.extend_from_slice(&chunk[..n]),
        }
    }

    let text = String::from_utf8(response).unwrap();
    let (head, body) = text.split_once("\r\n\r\n").unwrap_or((text.as_str(), ""));
    let status = head
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .expect("status line");
    (status, head.to_ascii_lowercase(), body.to_string())
}

#[test]
fn test_server_crud_over_http() {
    let addr = start();

    let (status, head, body) = request(addr, "POST", "/api/todos", r#"{"text":"buy milk"}"#);
    assert_eq!(status, 201);
    assert!(head.contains("content-type: application/json"));
    let created: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(created["id"], 1);

    let (status, _, body) = request(addr, "PATCH", "/api/todos/1/done", "");
    assert_eq!(status, 200);
    let toggled: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(toggled["done"], true);

    let (status, _, body) = request(addr, "GET", "/api/todos", "");
    assert_eq!(status, 200);
    let list: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _, body) = request(addr, "DELETE", "/api/todos", "");
    assert_eq!(status, 204);
    assert!(body.is_empty());

    let (status, _, body) = request(addr, "GET", "/api/todos/1", "");
    assert_eq!(status, 404);
    assert_eq!(body, r#"{"error":"Todo not found"}"#);
}

#[test]
fn test_server_plain_text_404() {
    let addr = start();
    let (status, head, body) = request(addr, "GET", "/missing", "");
    assert_eq!(status, 404);
    assert!(head.contains("content-type: text/plain"));
    assert_eq!(body, "Not found");
}
