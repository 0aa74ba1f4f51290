//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every GET with a fixed status and body and counts the requests it
//! has served.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

pub struct TableServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl TableServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server answering `200 OK` with `body`.
pub fn start(body: &str) -> TableServer {
    start_with_status(200, "OK", body)
}

/// Starts a server in a background thread answering every request with
/// `code reason` and `body`. The server runs until the process exits.
pub fn start_with_status(code: u16, reason: &str, body: &str) -> TableServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let response = Arc::new(format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        code,
        reason,
        body.len(),
        body
    ));
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let response = Arc::clone(&response);
            let hits = Arc::clone(&hits_srv);
            thread::spawn(move || handle(stream, &response, &hits));
        }
    });
    TableServer {
        url: format!("http://127.0.0.1:{}/table.dat", port),
        hits,
    }
}

/// Returns a URL on a port nothing listens on.
pub fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/table.dat", port)
}

fn handle(mut stream: std::net::TcpStream, response: &str, hits: &AtomicUsize) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    hits.fetch_add(1, Ordering::SeqCst);
    let _ = stream.write_all(response.as_bytes());
}
