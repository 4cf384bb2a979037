#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Canned reply for one path. `status == 0` accepts the connection and never answers.
#[derive(Clone)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Reply {
    pub fn json(body: &str) -> Self {
        Self { status: 200, content_type: "application/json", body: body.to_string() }
    }

    pub fn xml(body: &str) -> Self {
        Self { status: 200, content_type: "application/rss+xml", body: body.to_string() }
    }

    pub fn status(status: u16) -> Self {
        Self { status, content_type: "text/plain", body: format!("status {status}") }
    }

    pub fn hang() -> Self {
        Self { status: 0, content_type: "text/plain", body: String::new() }
    }
}

/// Loopback HTTP/1.1 server answering by exact path and recording every request target.
pub struct StubServer {
    pub base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub async fn start(routes: Vec<(&str, Reply)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let routes: Arc<HashMap<String, Reply>> =
            Arc::new(routes.into_iter().map(|(p, r)| (p.to_string(), r)).collect());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else { break };
                let routes = routes.clone();
                let seen = seen.clone();
                tokio::spawn(async move { handle(stream, routes, seen).await });
            }
        });
        Self { base, requests }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|t| t.split('?').next() == Some(path))
            .collect()
    }
}

async fn handle(mut stream: TcpStream, routes: Arc<HashMap<String, Reply>>, seen: Arc<Mutex<Vec<String>>>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let head = String::from_utf8_lossy(&buf).to_string();
    let target = head.split_whitespace().nth(1).unwrap_or("/").to_string();
    seen.lock().unwrap().push(target.clone());

    let path = target.split('?').next().unwrap_or("/");
    let reply = routes.get(path).cloned().unwrap_or_else(|| Reply::status(404));
    if reply.status == 0 {
        tokio::time::sleep(Duration::from_secs(30)).await;
        return;
    }
    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reply.content_type,
        reply.body.len(),
        reply.body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// An address nothing listens on.
pub async fn closed_port_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub const SEARCH_JSON: &str = r#"{
  "kind": "youtube#searchListResponse",
  "items": [
    {"id": {"kind": "youtube#video", "videoId": "a1"},
     "snippet": {"title": "Rust in 100 seconds", "channelTitle": "Fireship", "publishedAt": "2021-01-01T00:00:00Z"}},
    {"id": {"kind": "youtube#video", "videoId": "b2"},
     "snippet": {"title": "Rust full course", "channelTitle": "freeCodeCamp", "publishedAt": "2022-02-02T00:00:00Z"}},
    {"id": {"kind": "youtube#channel", "channelId": "UCx"},
     "snippet": {"title": "A channel"}},
    {"id": {"kind": "youtube#video", "videoId": "c3"},
     "snippet": {"title": "Ownership"}}
  ]
}"#;

pub const VIDEOS_JSON: &str = r#"{
  "items": [
    {"id": "a1", "contentDetails": {"duration": "PT2M5S"}},
    {"id": "b2", "contentDetails": {"duration": "PT1H0M1S"}}
  ]
}"#;

pub const FEED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/" xmlns:atom="http://www.w3.org/2005/Atom">
  <channel>
    <title>Machine Learning on Medium</title>
    <item>
      <title><![CDATA[Gradient descent, gently]]></title>
      <link>https://medium.com/p/gd</link>
      <pubDate>Tue, 02 Jan 2024 08:00:00 GMT</pubDate>
      <content:encoded><![CDATA[<p>Step by step.</p>]]></content:encoded>
    </item>
    <item>
      <title>Feature scaling</title>
      <link>https://medium.com/p/fs</link>
      <atom:updated>2024-01-03T08:00:00.000Z</atom:updated>
    </item>
    <item>
      <title>Third</title>
      <link>https://medium.com/p/third</link>
    </item>
  </channel>
</rss>"#;
