//! Gateway settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `MARKETPLACE_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REMOTE_BASE_URL: &str = "http://127.0.0.1:5000/api";
const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 10;

/// Raised when a configured value cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("remote base URL `{value}` is invalid: {source}")]
    RemoteBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("remote timeout must be at least one second")]
    ZeroTimeout,
}

/// Gateway configuration.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MARKETPLACE")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Base URL of the remote authority; request paths are appended to it.
    pub remote_base_url: Option<String>,
    /// Per-request timeout for remote calls, in seconds.
    pub remote_timeout_secs: Option<u64>,
}

impl AppSettings {
    /// Interface to bind, defaulting to every IPv4 interface.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Port to bind.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Parsed remote base URL.
    pub fn remote_base_url(&self) -> Result<Url, SettingsError> {
        let value = self
            .remote_base_url
            .as_deref()
            .unwrap_or(DEFAULT_REMOTE_BASE_URL);
        Url::parse(value).map_err(|source| SettingsError::RemoteBaseUrl {
            value: value.to_owned(),
            source,
        })
    }

    /// Remote request timeout.
    pub fn remote_timeout(&self) -> Result<Duration, SettingsError> {
        match self.remote_timeout_secs.unwrap_or(DEFAULT_REMOTE_TIMEOUT_SECS) {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}
