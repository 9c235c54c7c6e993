//! In-process HTTP stub for integration tests.
//!
//! Serves canned replies over a real socket so requests go through the full
//! reqwest stack. Each accepted connection counts as one hit.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Debug, Clone)]
pub enum Reply {
    /// Status code and JSON body.
    Status(u16, String),
    /// Status code, extra response headers and body.
    WithHeaders(u16, Vec<(&'static str, String)>, String),
    /// Read the request, then never answer.
    Stall,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Reply::Status(200, body.to_string())
    }
}

pub struct MockServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    paths: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    /// Answer every request with the same reply.
    pub async fn start(reply: Reply) -> Self {
        Self::sequence(vec![reply]).await
    }

    /// Answer the n-th connection with `replies[n]`, repeating the last one.
    pub async fn sequence(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let paths = Arc::new(Mutex::new(Vec::new()));

        let (task_hits, task_paths) = (hits.clone(), paths.clone());
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let n = task_hits.fetch_add(1, Ordering::SeqCst);
                let reply = replies.get(n).or_else(|| replies.last()).cloned();
                let paths = task_paths.clone();
                tokio::spawn(async move {
                    if let Some(reply) = reply {
                        serve(stream, reply, paths).await;
                    }
                });
            }
        });

        Self { addr, hits, paths }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

/// A base URL nothing listens on.
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

async fn serve(mut stream: TcpStream, reply: Reply, paths: Arc<Mutex<Vec<String>>>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    let head = String::from_utf8_lossy(&buf);
    if let Some(path) = head.lines().next().and_then(|l| l.split_whitespace().nth(1)) {
        paths.lock().unwrap().push(path.to_string());
    }

    match reply {
        Reply::Stall => tokio::time::sleep(Duration::from_secs(30)).await,
        Reply::Status(status, body) => respond(&mut stream, status, &[], &body).await,
        Reply::WithHeaders(status, headers, body) => {
            respond(&mut stream, status, &headers, &body).await
        }
    }
}

async fn respond(stream: &mut TcpStream, status: u16, headers: &[(&str, String)], body: &str) {
    let extra: String = headers
        .iter()
        .map(|(name, value)| format!("{}: {}\r\n", name, value))
        .collect();
    let resp = format!(
        "HTTP/1.1 {} Mock\r\ncontent-type: application/json\r\ncontent-length: {}\r\n{}connection: close\r\n\r\n{}",
        status,
        body.len(),
        extra,
        body
    );
    let _ = stream.write_all(resp.as_bytes()).await;
    let _ = stream.shutdown().await;
}
