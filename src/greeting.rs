//! The handler the `wireline` binary serves.

use tokio::io::AsyncReadExt;
use tracing::warn;

use crate::http::{Handler, Request, Response};

/// Greets the caller with the requested URI and echoes any request body.
pub struct Greeting;

impl Handler for Greeting {
    async fn serve(&self, res: &mut Response, req: &mut Request<'_>) {
        let mut body = Vec::new();

        if let Err(e) = req.body.read_to_end(&mut body).await {
            warn!(error = %e, "Failed to read request body");
            res.status = 400;
            return;
        }

        res.set_header("Content-Type", "text/plain");
        res.write_bytes(format!("Hello from wireline: {}\n", req.uri));
        res.write_bytes(&body);
    }
}
