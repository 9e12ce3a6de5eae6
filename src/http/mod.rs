//! HTTP/1.0 and HTTP/1.1 protocol handling.
//!
//! # Architecture
//!
//! - **`line`**: Reads CRLF-terminated lines from the connection's buffered reader
//! - **`parser`**: Builds a [`Request`](request::Request) from those lines
//! - **`request`**: Request, protocol version and Content-Length bounded body
//! - **`keepalive`**: Decides whether a connection stays open after a response
//! - **`response`**: Response filled in by the handler
//! - **`status`**: Status titles for the status line
//! - **`writer`**: Serializes and writes responses to the client
//! - **`handler`**: The application hook invoked per request
//! - **`connection`**: The per-connection request/response loop
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────────┐
//!        │ AwaitingRequest  │ ← Parse request line, headers
//!        └──────┬───────────┘
//!               │ Parsed          (parse error → 400, Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Handler fills in the response
//!        └──────┬───────────┘
//!               │
//!               ▼
//!        ┌──────────────────┐
//!        │ WritingResponse  │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent   (write error → Closed)
//!               ├─ Keep-Alive → AwaitingRequest (same connection)
//!               └─ Close → Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wireline::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     let handler = Arc::new(MyHandler);
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let conn = Connection::new(socket, handler.clone());
//!         tokio::spawn(async move {
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod handler;
pub mod keepalive;
pub mod line;
pub mod parser;
pub mod request;
pub mod response;
pub mod status;
pub mod writer;

pub use handler::Handler;
pub use request::{Request, Version};
pub use response::Response;
