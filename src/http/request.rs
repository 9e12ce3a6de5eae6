use std::collections::HashMap;
use std::fmt;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::io::{AsyncBufRead, AsyncRead, AsyncReadExt, ReadBuf, Take};

use crate::http::keepalive::{self, KeepAlive};

/// The buffered byte source a connection parses every request from.
pub type SharedReader<'a> = dyn AsyncBufRead + Send + Unpin + 'a;

/// HTTP protocol versions.
///
/// Only HTTP/1.0 and HTTP/1.1 carry connection semantics. Any other token is
/// kept verbatim so the response status line can echo it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Version {
    /// HTTP/1.0 - persistent connections are opt-in
    Http10,
    /// HTTP/1.1 - persistent connections are the default
    Http11,
    /// Any unrecognized protocol token
    Other(String),
}

impl Version {
    /// Classifies a protocol token from a request line.
    ///
    /// # Example
    ///
    /// ```
    /// # use wireline::http::request::Version;
    /// assert_eq!(Version::parse("HTTP/1.1"), Version::Http11);
    /// assert_eq!(Version::parse("HTTP/2"), Version::Other("HTTP/2".to_string()));
    /// ```
    pub fn parse(token: &str) -> Self {
        match token {
            "HTTP/1.0" => Version::Http10,
            "HTTP/1.1" => Version::Http11,
            other => Version::Other(other.to_string()),
        }
    }

    /// Returns the protocol token exactly as the client sent it.
    pub fn as_str(&self) -> &str {
        match self {
            Version::Http10 => "HTTP/1.0",
            Version::Http11 => "HTTP/1.1",
            Version::Other(token) => token,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body, limited to the declared Content-Length.
///
/// Reads past the limit return end-of-stream even when more bytes are
/// buffered on the connection; those belong to the next request.
pub struct Body<'a> {
    inner: Take<&'a mut SharedReader<'a>>,
}

impl<'a> Body<'a> {
    pub fn new(reader: &'a mut SharedReader<'a>, limit: u64) -> Self {
        Self {
            inner: AsyncReadExt::take(reader, limit),
        }
    }

    /// Number of body bytes not yet read.
    pub fn remaining(&self) -> u64 {
        self.inner.limit()
    }

    /// Reads and discards whatever is left of the body.
    ///
    /// Fails with `UnexpectedEof` if the peer closes before the declared
    /// length has been delivered.
    pub async fn drain(&mut self) -> io::Result<u64> {
        let discarded = tokio::io::copy(&mut self.inner, &mut tokio::io::sink()).await?;

        if self.remaining() > 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "connection closed before request body was complete",
            ));
        }

        Ok(discarded)
    }
}

impl AsyncRead for Body<'_> {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_read(cx, buf)
    }
}

impl fmt::Debug for Body<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Body")
            .field("remaining", &self.remaining())
            .finish()
    }
}

/// Represents a parsed HTTP request from a client.
///
/// Built fresh for every request by [`read_request`](crate::http::parser::read_request).
/// Header names are stored lower-cased; a repeated header keeps only the
/// last value seen.
#[derive(Debug)]
pub struct Request<'a> {
    /// The request method token (e.g. "GET"), not validated
    pub method: String,
    /// The request target exactly as sent, not decoded
    pub uri: String,
    /// Protocol version from the request line
    pub version: Version,
    /// Request headers keyed by lower-cased name
    pub headers: HashMap<String, String>,
    /// Request body stream
    pub body: Body<'a>,
}

impl Request<'_> {
    /// Retrieves a header value by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    /// Decides whether the connection survives this exchange and whether the
    /// `Connection` header is echoed back.
    pub fn keep_alive(&self) -> KeepAlive {
        keepalive::decide(&self.version, self.header("connection"))
    }
}
