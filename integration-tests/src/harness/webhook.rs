use serde_json::Value;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};
use url::Url;

/// Minimal HTTP endpoint that records JSON request bodies.
pub struct StubWebhook {
    url: Url,
    received: Arc<Mutex<Vec<Value>>>,
}

impl StubWebhook {
    /// Answers every request with `204 No Content`.
    pub fn start() -> Self {
        Self::start_with_status("204 No Content")
    }

    /// Answers every request with the given status line, e.g. `"500 Internal Server Error"`.
    pub fn start_with_status(status: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind stub webhook");
        let port = listener.local_addr().unwrap().port();
        let received = Arc::new(Mutex::new(Vec::new()));

        thread::spawn({
            let received = received.clone();
            move || {
                for stream in listener.incoming() {
                    let Ok(stream) = stream else { continue };
                    if let Some(body) = handle(stream, status) {
                        received.lock().unwrap().push(body);
                    }
                }
            }
        });

        let url = Url::parse(&format!("http://127.0.0.1:{port}/api/webhooks/1/token")).unwrap();
        Self { url, received }
    }

    pub fn url(&self) -> Url {
        self.url.clone()
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }

    /// Poll until at least `count` requests arrived (or panic).
    pub fn wait_for(&self, count: usize) -> Vec<Value> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let received = self.received();
            if received.len() >= count {
                return received;
            }
            if Instant::now() > deadline {
                panic!("expected {count} webhook requests, got {}", received.len());
            }
            thread::sleep(Duration::from_millis(20));
        }
    }
}

fn handle(mut stream: TcpStream, status: &str) -> Option<Value> {
    let mut reader = BufReader::new(stream.try_clone().ok()?);

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).ok()? == 0 {
            return None;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().ok()?;
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).ok()?;

    let response = format!("HTTP/1.1 {status}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
    let _ = stream.write_all(response.as_bytes());

    serde_json::from_slice(&body).ok()
}
