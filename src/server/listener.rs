use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::handler::Handler;

/// Accepts TCP connections and serves each one on its own task.
pub struct Server<H> {
    listener: TcpListener,
    handler: Arc<H>,
}

impl<H: Handler> Server<H> {
    pub async fn bind(addr: &str, handler: H) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind to {}", addr))?;

        Ok(Self {
            listener,
            handler: Arc::new(handler),
        })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Runs the accept loop. Only returns when accepting fails, which is
    /// never retried.
    pub async fn serve(self) -> anyhow::Result<()> {
        info!("Listening on {}", self.local_addr()?);

        loop {
            let (socket, peer) = self.listener.accept().await?;
            info!("Accepted connection from {}", peer);

            let conn = Connection::new(socket, self.handler.clone());
            tokio::spawn(async move {
                if let Err(e) = conn.run().await {
                    tracing::error!("Connection error from {}: {}", peer, e);
                }
            });
        }
    }
}

pub async fn run<H: Handler>(cfg: &Config, handler: H) -> anyhow::Result<()> {
    Server::bind(&cfg.server.listen_addr, handler)
        .await?
        .serve()
        .await
}
