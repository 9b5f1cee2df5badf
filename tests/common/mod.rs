// tests/common/mod.rs
//
// One-shot HTTP/1.0 stub server on localhost. Serves a fixed status and body
// to the first connection, then exits.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

pub const STUB_PAGE: &str = r#"<table><tr><td data-stat="player" csk="x">LeBron James</td></tr><tr><td data-stat="player" csk="y">Stephen Curry</td></tr></table>"#;

pub struct Stub {
    pub url: String,
    handle: JoinHandle<String>,
}

impl Stub {
    /// The raw request the server received.
    pub fn request(self) -> String {
        self.handle.join().unwrap()
    }
}

pub fn serve_once(status: &str, body: &str) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let status = status.to_string();
    let body = body.to_string();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        // Read headers only; a GET has no body
        let mut req = Vec::new();
        let mut buf = [0u8; 1024];
        while !req.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 { break; }
            req.extend_from_slice(&buf[..n]);
        }

        let resp = format!(
            "HTTP/1.0 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(resp.as_bytes()).unwrap();
        stream.flush().unwrap();
        String::from_utf8_lossy(&req).into_owned()
    });

    Stub { url: format!("http://127.0.0.1:{port}/leagues/NBA_2023_per_game.html"), handle }
}

/// A localhost URL nothing is listening on.
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}
