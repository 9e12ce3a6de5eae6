//! TCP listener accepting connections for the HTTP layer.

pub mod listener;

pub use listener::{run, Server};
