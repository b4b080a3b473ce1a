//! Remote authority outbound adapters.
//!
//! This module provides the reqwest implementation of the `RemoteTransport`
//! port.

mod http_transport;

pub use http_transport::HttpRemoteTransport;
