//! Minimal HTTP/1.1 server for probe integration tests.
//!
//! Serves scripted responses and records every request it sees, so tests can
//! assert which methods were actually attempted. Covers the behaviors the
//! probe protocol cares about: normal answers, HEAD rejected with 405, HEAD
//! connections dropped without a response, redirects, and stalled responses.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// How the server treats HEAD requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadBehavior {
    /// Answer 200 like any well-behaved server.
    Respond,
    /// Answer 405 Method Not Allowed (server dislikes HEAD but is alive).
    MethodNotAllowed,
    /// Close the connection without sending anything (transport failure).
    Drop,
}

#[derive(Debug, Clone, Copy)]
pub struct StubServerOptions {
    pub head: HeadBehavior,
    /// If true, requests to `/` are answered with 301 → `/moved`.
    pub redirect_root: bool,
    /// If set, stall for this long before answering any request.
    pub response_delay: Option<Duration>,
}

impl Default for StubServerOptions {
    fn default() -> Self {
        Self {
            head: HeadBehavior::Respond,
            redirect_root: false,
            response_delay: None,
        }
    }
}

/// Log of requests as "METHOD path" strings, in arrival order.
pub type RequestLog = Arc<Mutex<Vec<String>>>;

/// Starts the server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/") and the request log. The server runs
/// until the process exits.
pub fn start(opts: StubServerOptions) -> (String, RequestLog) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let log_for_server = Arc::clone(&log);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let log = Arc::clone(&log_for_server);
            thread::spawn(move || handle(stream, opts, &log));
        }
    });
    (format!("http://127.0.0.1:{}/", port), log)
}

fn handle(mut stream: std::net::TcpStream, opts: StubServerOptions, log: &RequestLog) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(5)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, path) = parse_request_line(request);
    log.lock().unwrap().push(format!("{method} {path}"));

    if let Some(delay) = opts.response_delay {
        thread::sleep(delay);
    }

    if opts.redirect_root && path == "/" {
        let _ = stream.write_all(
            b"HTTP/1.1 301 Moved Permanently\r\nLocation: /moved\r\nContent-Length: 0\r\n\r\n",
        );
        return;
    }

    if method.eq_ignore_ascii_case("HEAD") {
        match opts.head {
            HeadBehavior::Respond => {
                let _ = stream.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\n");
            }
            HeadBehavior::MethodNotAllowed => {
                let _ = stream
                    .write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
            }
            HeadBehavior::Drop => {
                // Close without a response; the client sees a dead transport.
            }
        }
        return;
    }

    if method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nok");
        return;
    }

    let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
}

/// Returns (method, path) from the request line.
fn parse_request_line(request: &str) -> (&str, &str) {
    let line = request.lines().next().unwrap_or("");
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");
    (method, path)
}
