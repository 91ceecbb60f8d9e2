//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::io::Write;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Hardhat / Anvil development phrase.
pub const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

/// Factory address written into test manifests.
pub const FACTORY_ADDRESS: &str = "0x7122cd1221C20892234186facfE8615e6743Ab02";

/// Handle to a running mock node.
pub struct MockNode {
    pub url: String,
    requests: Arc<AtomicU32>,
    methods: Arc<Mutex<Vec<String>>>,
}

impl MockNode {
    /// Number of JSON-RPC requests served so far.
    pub fn requests(&self) -> u32 {
        self.requests.load(Ordering::SeqCst)
    }

    /// JSON-RPC methods received so far, in arrival order.
    pub fn methods(&self) -> Vec<String> {
        self.methods.lock().unwrap().clone()
    }
}

/// Start a JSON-RPC backend that answers `eth_chainId` with `chain_id`.
///
/// Any other method gets a JSON-RPC "method not found" error.
pub async fn start_mock_node(chain_id: u64) -> MockNode {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(AtomicU32::new(0));
    let methods = Arc::new(Mutex::new(Vec::new()));
    let counter = requests.clone();
    let log = methods.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let counter = counter.clone();
                    let log = log.clone();
                    tokio::spawn(async move {
                        serve_one(socket, chain_id, counter, log).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    MockNode {
        url: format!("http://{}", addr),
        requests,
        methods,
    }
}

async fn serve_one(
    mut socket: TcpStream,
    chain_id: u64,
    counter: Arc<AtomicU32>,
    log: Arc<Mutex<Vec<String>>>,
) {
    let Some(body) = read_request_body(&mut socket).await else {
        return;
    };

    let request: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let id = request.get("id").cloned().unwrap_or(Value::Null);
    let method = request.get("method").and_then(Value::as_str);
    log.lock().unwrap().push(method.unwrap_or_default().to_string());
    counter.fetch_add(1, Ordering::SeqCst);

    let response = match method {
        Some("eth_chainId") => json!({
            "jsonrpc": "2.0",
            "id": id,
            "result": format!("0x{:x}", chain_id),
        }),
        _ => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": -32601, "message": "method not found" },
        }),
    };

    let payload = response.to_string();
    let response_str = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        payload.len(),
        payload
    );
    let _ = socket.write_all(response_str.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// Read one HTTP request and return its body.
async fn read_request_body(socket: &mut TcpStream) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Some(buf[header_end..header_end + content_length].to_vec())
}

/// Write a local deployment manifest listing `contracts` (name, address).
pub fn write_manifest(contracts: &[(&str, &str)]) -> tempfile::NamedTempFile {
    let entries: serde_json::Map<String, Value> = contracts
        .iter()
        .map(|(name, address)| {
            (name.to_string(), json!({ "address": address, "abi": [] }))
        })
        .collect();
    let manifest = json!({
        "name": "localhost",
        "chainId": "31337",
        "contracts": entries,
    });

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(manifest.to_string().as_bytes()).unwrap();
    file
}
