use std::{fmt::Display, net::SocketAddr};

use anyhow::Context;
use axum::Router;
use derive_builder::Builder;
use tokio::net::{TcpListener, ToSocketAddrs};

/// Single-listener HTTP server. Binds once at startup and serves the router
/// until the process terminates; a bind failure is fatal and surfaces as an
/// error rather than being retried.
#[derive(Builder)]
#[builder(pattern = "owned")]
pub struct HttpServer<Address> {
    pub router: Router,

    #[builder(setter(name = "bind"))]
    pub listen_addr: Address,
}

impl<Address: ToSocketAddrs + Display> HttpServer<Address> {
    /// Binds the listen address, logging the bound port on success.
    pub async fn bind(self) -> anyhow::Result<BoundServer> {
        let listener = TcpListener::bind(&self.listen_addr)
            .await
            .with_context(|| format!("failed to bind {}", self.listen_addr))?;

        log::info!("Server listening on port {}", listener.local_addr()?.port());

        Ok(BoundServer {
            listener,
            router: self.router,
        })
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        self.bind().await?.serve().await
    }
}

/// A server that holds its listening socket. Splitting bind from serve lets
/// callers learn the resolved port (needed when binding port 0) before
/// requests start flowing.
#[derive(Debug)]
pub struct BoundServer {
    listener: TcpListener,
    router: Router,
}

impl BoundServer {
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        axum::serve(self.listener, self.router)
            .await
            .context("server error")
    }
}
