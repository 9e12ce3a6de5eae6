use std::collections::HashMap;

use thiserror::Error;

use crate::http::line::read_line;
use crate::http::request::{Body, Request, SharedReader, Version};

/// Reasons a request could not be read off the connection.
///
/// The connection loop treats every variant the same way: a fixed 400
/// response followed by closing the connection.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stream ended before end of line")]
    UnexpectedEof,

    #[error("request line is not valid UTF-8")]
    InvalidUtf8,

    #[error("malformed request line: {0:?}")]
    MalformedRequestLine(String),

    #[error("invalid Content-Length: {0:?}")]
    InvalidContentLength(String),
}

/// Reads one request from the connection's buffered reader.
///
/// The returned request borrows the reader through its body, so the next
/// request cannot be parsed until this one is dropped.
pub async fn read_request<'a>(reader: &'a mut SharedReader<'a>) -> Result<Request<'a>, ParseError> {
    let request_line =
        String::from_utf8(read_line(reader).await?).map_err(|_| ParseError::InvalidUtf8)?;
    let (method, uri, version) = parse_request_line(&request_line)
        .ok_or_else(|| ParseError::MalformedRequestLine(request_line.clone()))?;

    let mut headers = HashMap::new();

    loop {
        let line = read_line(reader).await?;

        if line.is_empty() {
            break;
        }

        // Header values may carry non-UTF-8 bytes; lines without a colon are ignored
        if let Some((key, value)) = parse_header_line(&String::from_utf8_lossy(&line)) {
            headers.insert(key, value);
        }
    }

    let content_length = content_length(&headers)?;

    Ok(Request {
        method: method.to_string(),
        uri: uri.to_string(),
        version: Version::parse(version),
        headers,
        body: Body::new(reader, content_length),
    })
}

/// Splits `METHOD SP URI SP VERSION`. Any field count other than three is
/// rejected.
pub fn parse_request_line(line: &str) -> Option<(&str, &str, &str)> {
    let mut parts = line.split(' ');

    let method = parts.next()?;
    let uri = parts.next()?;
    let version = parts.next()?;

    if parts.next().is_some() {
        return None;
    }

    Some((method, uri, version))
}

/// Splits a header line on its first colon, lower-casing the name and
/// trimming the value.
pub fn parse_header_line(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(':')?;

    Some((key.trim().to_ascii_lowercase(), value.trim().to_string()))
}

// A negative length yields an empty body rather than an error.
fn content_length(headers: &HashMap<String, String>) -> Result<u64, ParseError> {
    match headers.get("content-length") {
        None => Ok(0),
        Some(value) => value
            .parse::<i64>()
            .map(|n| n.max(0) as u64)
            .map_err(|_| ParseError::InvalidContentLength(value.clone())),
    }
}
