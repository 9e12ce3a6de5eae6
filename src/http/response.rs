use std::collections::HashMap;
use std::io;

use bytes::{BufMut, BytesMut};

/// An HTTP response under construction by a handler.
///
/// Starts as `200` with no headers and an empty body. The handler may change
/// the status, add headers and append body bytes; `Date` and
/// `Content-Length` are filled in when the response is serialized.
#[derive(Debug)]
pub struct Response {
    /// Numeric status code
    pub status: u16,
    /// Headers, names kept in the case they were inserted with
    pub headers: HashMap<String, String>,

    version: String,
    body: BytesMut,
}

impl Response {
    /// Creates an empty `200` response whose status line will carry the
    /// given protocol token.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: HashMap::new(),
            version: version.into(),
            body: BytesMut::new(),
        }
    }

    /// Protocol token echoed in the status line.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Body bytes written so far.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Adds or replaces a header.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key.into(), value.into());
    }

    /// Appends bytes to the body.
    pub fn write_bytes(&mut self, data: impl AsRef<[u8]>) {
        self.body.put_slice(data.as_ref());
    }

    pub(crate) fn into_parts(self) -> (u16, String, HashMap<String, String>, BytesMut) {
        (self.status, self.version, self.headers, self.body)
    }
}

impl io::Write for Response {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
