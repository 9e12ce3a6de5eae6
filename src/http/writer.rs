use chrono::Utc;
use thiserror::Error;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;
use crate::http::status;

const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Sent instead of a response when a request cannot be parsed.
pub const BAD_REQUEST: &[u8] = b"HTTP/1.1 400 Bad Request\r\nConnection: close\r\n\r\n";

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("unsupported status code: {0}")]
    UnsupportedStatus(u16),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection closed while writing")]
    ConnectionClosed,
}

/// Current UTC time formatted for the `Date` header.
pub fn http_date() -> String {
    Utc::now().format(DATE_FORMAT).to_string()
}

/// Finalizes a response and renders it in wire format.
///
/// `Date` and `Content-Length` always overwrite any value the handler set,
/// whatever case it used for the name.
/// Header order is unspecified.
pub fn serialize_response(resp: Response) -> Result<Vec<u8>, ResponseError> {
    let (status, version, mut headers, body) = resp.into_parts();
    let title = status::title(status).ok_or(ResponseError::UnsupportedStatus(status))?;

    headers.retain(|k, _| {
        !k.eq_ignore_ascii_case("date") && !k.eq_ignore_ascii_case("content-length")
    });
    headers.insert("Date".to_string(), http_date());
    headers.insert("Content-Length".to_string(), body.len().to_string());

    let mut buf = Vec::with_capacity(128 + body.len());

    // Status line
    buf.extend_from_slice(format!("{} {} {}\r\n", version, status, title).as_bytes());

    // Headers
    for (k, v) in &headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(&body);

    Ok(buf)
}

/// A serialized response and how much of it has reached the peer.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: Response) -> Result<Self, ResponseError> {
        Ok(Self {
            buffer: serialize_response(response)?,
            written: 0,
        })
    }

    /// Bytes successfully handed to the stream so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> Result<(), ResponseError>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(ResponseError::ConnectionClosed);
            }

            self.written += n;
        }

        stream.flush().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_is_rfc1123() {
        let date = http_date();

        assert!(date.ends_with(" GMT"));
        assert_eq!(date.len(), "Sun, 06 Nov 1994 08:49:37 GMT".len());
        assert_eq!(&date[3..5], ", ");
    }
}
