use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, ReadHalf, WriteHalf};
use tracing::{debug, warn};

use crate::http::handler::Handler;
use crate::http::keepalive::KeepAlive;
use crate::http::parser::{read_request, ParseError};
use crate::http::request::Body;
use crate::http::response::Response;
use crate::http::writer::{ResponseWriter, BAD_REQUEST};

/// One accepted connection serving requests strictly one after another.
///
/// The read side is buffered once and that buffer is reused for every
/// request on the connection.
pub struct Connection<S, H> {
    reader: BufReader<ReadHalf<S>>,
    writer: WriteHalf<S>,
    handler: Arc<H>,
    state: ConnectionState,
    // Body bytes the last handler left unread
    unread_body: u64,
}

pub enum ConnectionState {
    /// Parse the next request and dispatch it to the handler
    AwaitingRequest,
    /// Send a serialized response, then keep going or close
    WritingResponse(ResponseWriter, KeepAlive),
    Closed,
}

impl<S, H> Connection<S, H>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    H: Handler,
{
    pub fn new(stream: S, handler: Arc<H>) -> Self {
        let (reader, writer) = tokio::io::split(stream);

        Self {
            reader: BufReader::new(reader),
            writer,
            handler,
            state: ConnectionState::AwaitingRequest,
            unread_body: 0,
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// Serves requests until the peer goes away, a request cannot be parsed,
    /// a response cannot be written, or keep-alive ends.
    ///
    /// The stream is released when this returns, on every path.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let result = loop {
            if let ConnectionState::Closed = self.state {
                break Ok(());
            }

            if let Err(e) = self.step().await {
                break Err(e);
            }
        };

        // Best effort; the peer may already have gone
        let _ = self.writer.shutdown().await;

        result
    }

    /// Advances the connection by one state.
    pub async fn step(&mut self) -> anyhow::Result<()> {
        match &mut self.state {
            ConnectionState::AwaitingRequest => match self.dispatch().await {
                Ok(next) => self.state = next,
                Err(e) => {
                    self.state = ConnectionState::Closed;
                    return Err(e);
                }
            },

            ConnectionState::WritingResponse(writer, policy) => {
                let keep_alive = policy.keep_alive;

                if let Err(e) = writer.write_to_stream(&mut self.writer).await {
                    warn!(error = %e, written = writer.written(), "Failed to write response");
                    self.state = ConnectionState::Closed;
                    return Err(e.into());
                }

                self.state = if keep_alive {
                    ConnectionState::AwaitingRequest
                } else {
                    ConnectionState::Closed
                };
            }

            ConnectionState::Closed => {}
        }

        Ok(())
    }

    /// Reads one request and lets the handler build its response.
    async fn dispatch(&mut self) -> anyhow::Result<ConnectionState> {
        if self.unread_body > 0 {
            // Leftover body bytes would otherwise be parsed as the next request
            Body::new(&mut self.reader, self.unread_body)
                .drain()
                .await
                .context("failed to discard unread request body")?;
            self.unread_body = 0;
        }

        let mut request = match read_request(&mut self.reader).await {
            Ok(request) => request,
            Err(e) => {
                if matches!(e, ParseError::UnexpectedEof) {
                    debug!("Peer closed the connection");
                } else {
                    warn!(error = %e, "Malformed request");
                }

                // The 400 is sent even when the peer is gone; a failed write changes nothing
                let _ = self.writer.write_all(BAD_REQUEST).await;
                return Ok(ConnectionState::Closed);
            }
        };

        let policy = request.keep_alive();
        let mut response = Response::new(request.version.as_str());

        if policy.echo {
            if let Some(value) = request.header("connection") {
                response.set_header("Connection", value);
            }
        }

        self.handler.serve(&mut response, &mut request).await;
        self.unread_body = request.body.remaining();

        debug!(
            method = %request.method,
            uri = %request.uri,
            version = %request.version,
            status = response.status,
            keep_alive = policy.keep_alive,
            "Request dispatched"
        );

        let writer = match ResponseWriter::new(response) {
            Ok(writer) => writer,
            Err(e) => {
                warn!(error = %e, "Failed to serialize response");
                return Err(e.into());
            }
        };

        Ok(ConnectionState::WritingResponse(writer, policy))
    }
}
