//! HTTP listener bootstrap.
//!
//! Binds a TCP listener on the configured address and serves a responder's
//! router on it until the process is killed.

use axum::Router;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::errors::ServerError;

/// Port used when `PORT` is absent or unparseable
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable holding the listen port
pub const PORT_ENV: &str = "PORT";

/// Where the server listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: IpAddr,
    /// TCP port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Default config with the port taken from `PORT`
    pub fn from_env() -> Self {
        let raw = std::env::var(PORT_ENV).ok();
        Self {
            port: resolve_port(raw.as_deref()),
            ..Default::default()
        }
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Parse a raw `PORT` value, falling back to [`DEFAULT_PORT`]
pub fn resolve_port(raw: Option<&str>) -> u16 {
    let Some(value) = raw else {
        return DEFAULT_PORT;
    };

    match value.trim().parse::<u16>() {
        Ok(port) => port,
        Err(e) => {
            warn!(
                value,
                error = %e,
                "Ignoring invalid {}, using {}", PORT_ENV, DEFAULT_PORT
            );
            DEFAULT_PORT
        }
    }
}

/// A bound listener, ready to serve
pub struct HttpServer {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl HttpServer {
    /// Bind the listener. A port already in use is reported as [`ServerError::Bind`].
    pub async fn bind(config: &ServerConfig) -> Result<Self, ServerError> {
        let addr = config.socket_addr();

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| ServerError::Bind { addr, source })?;

        Ok(Self {
            listener,
            local_addr,
        })
    }

    /// Address actually bound (resolves port 0)
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Accept connections until the process exits
    pub async fn serve(self, router: Router) -> Result<(), ServerError> {
        info!(
            address = %self.local_addr,
            "Server running on http://localhost:{}",
            self.local_addr.port()
        );

        axum::serve(self.listener, router)
            .await
            .map_err(|source| ServerError::Serve { source })
    }
}
