//! Shared test helpers: a one-shot local HTTP server and sample payloads.

#![allow(dead_code)]

use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A stub server that answers exactly one request.
pub struct StubServer {
    /// Endpoint URL to hand to the provider.
    pub endpoint: String,
    /// Receives the raw request head once the request arrives.
    pub request: oneshot::Receiver<String>,
}

/// Serve one canned response with the given status line and body.
pub async fn serve_once(status_line: &'static str, body: String) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub listener address");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        let mut buf = vec![0_u8; 8192];
        let n = socket.read(&mut buf).await.unwrap_or(0);
        let _ = tx.send(String::from_utf8_lossy(&buf[..n]).into_owned());

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    StubServer {
        endpoint: format!("http://{addr}/api/"),
        request: rx,
    }
}

/// An endpoint on a port that nothing listens on.
pub async fn refused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe listener address");
    drop(listener);
    format!("http://{addr}/api/")
}

/// One user object in the randomuser.me format.
pub fn sample_user(first: &str) -> Value {
    json!({
        "gender": "female",
        "name": { "title": "Ms", "first": first, "last": "Tester" },
        "location": { "city": "Springfield", "postcode": 12345 },
        "email": format!("{}@example.com", first.to_lowercase()),
        "picture": {
            "large": format!("https://randomuser.me/api/portraits/women/{first}.jpg"),
            "medium": format!("https://randomuser.me/api/portraits/med/women/{first}.jpg"),
            "thumbnail": format!("https://randomuser.me/api/portraits/thumb/women/{first}.jpg")
        },
        "nat": "US"
    })
}

/// A full response body holding `names.len()` users.
pub fn results_body(names: &[&str]) -> String {
    let results: Vec<Value> = names.iter().map(|n| sample_user(n)).collect();
    json!({
        "results": results,
        "info": { "seed": "abc123", "results": names.len(), "page": 1, "version": "1.4" }
    })
    .to_string()
}
