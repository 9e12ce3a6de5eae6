#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use wireline::http::connection::Connection;
use wireline::http::Handler;

#[derive(Debug)]
pub struct RawResponse {
    pub status_line: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|v| v.as_str())
    }
}

/// Splits a byte stream holding zero or more responses, framing bodies by
/// Content-Length (absent means empty).
pub fn split_responses(mut bytes: &[u8]) -> Vec<RawResponse> {
    let mut responses = Vec::new();

    while !bytes.is_empty() {
        let head_end = bytes
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("response head is terminated");
        let head = std::str::from_utf8(&bytes[..head_end]).unwrap();
        let mut lines = head.split("\r\n");

        let status_line = lines.next().unwrap().to_string();
        let headers: HashMap<String, String> = lines
            .map(|line| {
                let (k, v) = line.split_once(": ").unwrap();
                (k.to_string(), v.to_string())
            })
            .collect();

        let len: usize = headers
            .get("Content-Length")
            .map(|v| v.parse().unwrap())
            .unwrap_or(0);
        let body_start = head_end + 4;
        let body = bytes[body_start..body_start + len].to_vec();

        bytes = &bytes[body_start + len..];
        responses.push(RawResponse {
            status_line,
            headers,
            body,
        });
    }

    responses
}

/// Drives one in-memory connection: writes `input`, half-closes, and
/// collects everything the server sent until it closed its side.
pub async fn drive<H: Handler>(handler: H, input: &[u8]) -> (Vec<u8>, anyhow::Result<()>) {
    let (mut client, server) = tokio::io::duplex(64 * 1024);
    let task = tokio::spawn(Connection::new(server, Arc::new(handler)).run());

    client.write_all(input).await.unwrap();
    client.shutdown().await.unwrap();

    let mut output = Vec::new();
    client.read_to_end(&mut output).await.unwrap();

    (output, task.await.unwrap())
}
