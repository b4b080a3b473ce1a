//! Reqwest-backed transport for the remote authority.
//!
//! This adapter owns wire details only: URL construction, JSON encoding,
//! timeout mapping and body decoding. Every HTTP status is returned to the
//! caller; only calls that produced no response fail.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use serde_json::Value;
use tracing::debug;

use crate::domain::ports::{
    RemoteMethod, RemoteRequest, RemoteResponse, RemoteTransport, RemoteTransportError,
};

const DEFAULT_USER_AGENT: &str = "marketplace-gateway/0.1";

/// Transport sending requests below one base URL.
pub struct HttpRemoteTransport {
    client: Client,
    base_url: Url,
}

impl HttpRemoteTransport {
    /// Build a transport using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTransportError::InvalidRequest`] when `base_url` cannot
    /// carry path segments (for example `mailto:` URLs), or
    /// [`RemoteTransportError::Transport`] when the reqwest client cannot be
    /// constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, RemoteTransportError> {
        if base_url.cannot_be_a_base() {
            return Err(RemoteTransportError::invalid_request(format!(
                "remote base URL cannot carry paths: {base_url}"
            )));
        }
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|error| RemoteTransportError::transport(error.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// Base URL every request path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, request: &RemoteRequest) -> Result<Url, RemoteTransportError> {
        build_endpoint(&self.base_url, request)
    }
}

fn build_endpoint(base: &Url, request: &RemoteRequest) -> Result<Url, RemoteTransportError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| {
            RemoteTransportError::invalid_request(format!(
                "remote base URL cannot carry paths: {base}"
            ))
        })?
        .pop_if_empty()
        .extend(request.path.segments());
    if !request.query.is_empty() {
        url.query_pairs_mut().extend_pairs(&request.query);
    }
    Ok(url)
}

fn method_for(method: RemoteMethod) -> Method {
    match method {
        RemoteMethod::Get => Method::GET,
        RemoteMethod::Post => Method::POST,
        RemoteMethod::Put => Method::PUT,
        RemoteMethod::Delete => Method::DELETE,
    }
}

/// Decode a response body: empty is `Null`, non-JSON is kept as text.
fn decode_body(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

fn map_transport_error(error: reqwest::Error) -> RemoteTransportError {
    if error.is_timeout() {
        RemoteTransportError::timeout(error.to_string())
    } else {
        RemoteTransportError::transport(error.to_string())
    }
}

#[async_trait]
impl RemoteTransport for HttpRemoteTransport {
    async fn send(&self, request: RemoteRequest) -> Result<RemoteResponse, RemoteTransportError> {
        let url = self.endpoint(&request)?;
        let mut builder = self
            .client
            .request(method_for(request.method), url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        debug!(
            method = %request.method,
            path = %request.path,
            status,
            bytes = bytes.len(),
            "remote response received"
        );

        Ok(RemoteResponse {
            status,
            body: decode_body(bytes.as_ref()),
        })
    }
}
