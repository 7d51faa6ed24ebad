//! Raw-TCP fixture server for webget integration tests.
//!
//! # Design
//! Serves canned byte-for-byte responses keyed by request path. Responses
//! are written exactly as configured — including deliberately malformed
//! ones — so client tests can exercise wire shapes an HTTP framework would
//! refuse to emit. Each connection serves a single request and is then
//! closed; the HTTP/1.0 client reads the body up to end of stream.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Mapping from request path to the exact bytes written back. Unknown
/// paths get a plain 404.
#[derive(Debug, Clone, Default)]
pub struct Routes {
    responses: HashMap<String, Vec<u8>>,
}

impl Routes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `reply` verbatim for requests to `path`.
    pub fn route(mut self, path: &str, reply: Vec<u8>) -> Self {
        self.responses.insert(path.to_string(), reply);
        self
    }
}

/// Build a well-formed HTTP/1.0 response with CRLF framing.
pub fn response(status: i32, reason: &str, headers: &[(&str, &str)], body: &str) -> Vec<u8> {
    let mut out = format!("HTTP/1.0 {status} {reason}\r\n");
    for (name, value) in headers {
        out.push_str(name);
        out.push_str(": ");
        out.push_str(value);
        out.push_str("\r\n");
    }
    out.push_str("\r\n");
    out.push_str(body);
    out.into_bytes()
}

/// Accept connections forever, serving one request per connection.
pub async fn run(listener: TcpListener, routes: Routes) -> Result<(), std::io::Error> {
    let routes = Arc::new(routes);
    loop {
        let (socket, _) = listener.accept().await?;
        let routes = Arc::clone(&routes);
        tokio::spawn(async move {
            let _ = serve(socket, &routes).await;
        });
    }
}

async fn serve(mut socket: TcpStream, routes: &Routes) -> Result<(), std::io::Error> {
    let path = read_request_path(&mut socket).await?;
    let reply = routes
        .responses
        .get(&path)
        .cloned()
        .unwrap_or_else(|| response(404, "Not Found", &[], "not found\n"));
    socket.write_all(&reply).await?;
    socket.shutdown().await
}

/// Read until the blank line ending the request head, then pull the target
/// out of the request line. Request bodies are not supported.
async fn read_request_path(socket: &mut TcpStream) -> Result<String, std::io::Error> {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
    }

    let head = String::from_utf8_lossy(&head);
    let request_line = head.lines().next().unwrap_or("");
    Ok(request_line.split(' ').nth(1).unwrap_or("/").to_string())
}
