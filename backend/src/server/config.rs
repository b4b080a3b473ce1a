//! HTTP server configuration object and helpers.

use std::sync::Arc;

use marketplace::domain::ports::RemoteTransport;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) transport: Arc<dyn RemoteTransport>,
}

impl ServerConfig {
    /// Bind to `host:port` and relay through `transport`.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, transport: Arc<dyn RemoteTransport>) -> Self {
        Self {
            host: host.into(),
            port,
            transport,
        }
    }

    /// Return the host and port the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
