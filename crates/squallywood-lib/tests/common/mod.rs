//! Shared fixture helpers for integration tests.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use squallywood_lib::{load_trail_records, TrailRecord, TrailRow};

/// Path to the minimal trail snapshot fixture.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/minimal_trails.json")
}

/// Records loaded from the fixture snapshot.
#[allow(dead_code)]
pub fn fixture_records() -> Vec<TrailRecord> {
    load_trail_records(&fixture_path()).expect("fixture loads")
}

/// Shorthand for a record with every slot populated.
#[allow(dead_code)]
pub fn trail(name: &str, connections: &[&str]) -> TrailRecord {
    TrailRecord::new(name, connections.iter().copied())
}

/// Wire row with up to eight downhill slots filled in order.
#[allow(dead_code)]
pub fn row(name: &str, connections: &[&str]) -> TrailRow {
    let mut slots = connections.iter().map(|c| Some(c.to_string()));
    let mut next = || slots.next().flatten();
    TrailRow {
        trail_name: name.to_string(),
        downhill_node_1: next(),
        downhill_node_2: next(),
        downhill_node_3: next(),
        downhill_node_4: next(),
        downhill_node_5: next(),
        downhill_node_6: next(),
        downhill_node_7: next(),
        downhill_node_8: next(),
    }
}

/// Serve a single HTTP response on a local port.
///
/// Returns the base URL and a handle yielding the raw request head that was
/// received.
#[allow(dead_code)]
pub fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let mut head = Vec::new();
        let mut buffer = [0_u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = stream.read(&mut buffer).expect("read request");
            if read == 0 {
                break;
            }
            head.extend_from_slice(&buffer[..read]);
        }
        stream
            .write_all(response.as_bytes())
            .expect("write response");
        String::from_utf8_lossy(&head).into_owned()
    });

    (base_url, handle)
}
