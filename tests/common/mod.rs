//! Shared helpers for the capture integration tests.
//!
//! wiremock always sends a complete body, so the endless and stalled
//! streams are served from a raw `TcpListener` instead.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use streamcap::CaptureLogger;

/// Logger that keeps every message so tests can assert on them.
#[derive(Default)]
pub struct RecordingLogger {
    pub infos: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl CaptureLogger for RecordingLogger {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// Starts a server that answers every GET with `200 OK` and then writes
/// `chunk` every `interval` until the client hangs up. Returns the URL.
pub fn start_endless(content_type: &'static str, chunk: Vec<u8>, interval: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let chunk = Arc::new(chunk);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let chunk = Arc::clone(&chunk);
            thread::spawn(move || serve_endless(stream, content_type, &chunk, interval));
        }
    });
    format!("http://127.0.0.1:{}/live", port)
}

fn serve_endless(mut stream: TcpStream, content_type: &str, chunk: &[u8], interval: Duration) {
    if !read_request(&mut stream) {
        return;
    }
    let head = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nConnection: close\r\n\r\n",
        content_type
    );
    if stream.write_all(head.as_bytes()).is_err() {
        return;
    }
    loop {
        if stream.write_all(chunk).is_err() || stream.flush().is_err() {
            return;
        }
        thread::sleep(interval);
    }
}

/// Starts a server that promises `content_length` bytes, sends only `body`
/// and then closes the connection. Returns the URL.
pub fn start_truncated(content_type: &'static str, content_length: usize, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    thread::spawn(move || {
        for mut stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || {
                if !read_request(&mut stream) {
                    return;
                }
                let head = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
                    content_type, content_length
                );
                let _ = stream.write_all(head.as_bytes());
                let _ = stream.write_all(&body);
                let _ = stream.flush();
                let _ = stream.shutdown(std::net::Shutdown::Both);
            });
        }
    });
    format!("http://127.0.0.1:{}/cut", port)
}

/// Starts a server that accepts connections and reads the request but never
/// answers. Returns the URL.
pub fn start_stalled() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for mut stream in listener.incoming().flatten() {
            thread::spawn(move || {
                read_request(&mut stream);
                thread::sleep(Duration::from_secs(30));
            });
        }
    });
    format!("http://127.0.0.1:{}/silent", port)
}

fn read_request(stream: &mut TcpStream) -> bool {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    matches!(stream.read(&mut buf), Ok(n) if n > 0)
}

/// Lists the file names directly inside `dir`.
pub fn file_names(dir: &std::path::Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default()
}
