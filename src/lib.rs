//! Wireline - a small HTTP/1.0 and HTTP/1.1 server
//!
//! Parses line-oriented requests, hands them to a [`Handler`](http::Handler)
//! and writes the response back, keeping connections alive when the
//! protocol version and `Connection` header allow it.

pub mod config;
pub mod greeting;
pub mod http;
pub mod server;
