use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::http::parser::ParseError;

/// Reads one line up to and including the next `\n` and strips the
/// trailing `\r\n`.
///
/// Lines are raw bytes; decoding is left to the caller. Hitting end-of-stream
/// before the terminator is an error, even when some bytes were already
/// read. No maximum line length is enforced.
pub async fn read_line<R>(reader: &mut R) -> Result<Vec<u8>, ParseError>
where
    R: AsyncBufRead + Unpin + ?Sized,
{
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf).await?;

    if buf.last() != Some(&b'\n') {
        return Err(ParseError::UnexpectedEof);
    }

    if buf.ends_with(b"\r\n") {
        buf.truncate(buf.len() - 2);
    }

    Ok(buf)
}
