//! Driven port for calls to the remote authority.
//!
//! The remote authority is the service of record for coupons, analytics and
//! relayed submissions. Domain clients describe each call as a
//! [`RemoteRequest`]; adapters own the wire. Transports return every HTTP
//! status as a [`RemoteResponse`] and only fail when no response arrived or
//! the request could not be expressed.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use super::define_port_error;

/// HTTP method of a remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RemoteMethod {
    /// Upper-case method name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for RemoteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path below the remote base URL, held as unescaped segments.
///
/// Adapters percent-encode each segment, so identifiers containing `/` or
/// `?` stay inside their own segment.
///
/// # Examples
/// ```
/// use marketplace::domain::ports::RemotePath;
///
/// let path = RemotePath::new(["coupons", "apply"]);
/// assert_eq!(path.to_string(), "/coupons/apply");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemotePath(Vec<String>);

impl RemotePath {
    /// Build a path from its segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Unescaped path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for RemotePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// One call to the remote authority.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRequest {
    /// HTTP method.
    pub method: RemoteMethod,
    /// Path relative to the remote base URL.
    pub path: RemotePath,
    /// Query parameters in order.
    pub query: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<Value>,
}

impl RemoteRequest {
    fn new(method: RemoteMethod, path: RemotePath, body: Option<Value>) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            body,
        }
    }

    /// `GET` without a body.
    pub fn get(path: RemotePath) -> Self {
        Self::new(RemoteMethod::Get, path, None)
    }

    /// `POST` with a JSON body.
    pub fn post(path: RemotePath, body: Value) -> Self {
        Self::new(RemoteMethod::Post, path, Some(body))
    }

    /// `PUT` with a JSON body.
    pub fn put(path: RemotePath, body: Value) -> Self {
        Self::new(RemoteMethod::Put, path, Some(body))
    }

    /// `DELETE` without a body.
    pub fn delete(path: RemotePath) -> Self {
        Self::new(RemoteMethod::Delete, path, None)
    }

    /// Append query parameters.
    pub fn with_query<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(key, value)| (key.into(), value.into())));
        self
    }
}

/// Response from the remote authority, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded body. An empty body is `Value::Null`; a body that is not JSON
    /// is carried as `Value::String`.
    pub body: Value,
}

impl RemoteResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

define_port_error! {
    /// Failures that left no remote response to relay.
    pub enum RemoteTransportError {
        /// Connection or protocol failure before a response arrived.
        Transport { message: String } =>
            "remote transport failed: {message}",
        /// The call exceeded the configured timeout.
        Timeout { message: String } =>
            "remote call timed out: {message}",
        /// A successful response carried a body the caller could not decode.
        Decode { message: String } =>
            "remote response decode failed: {message}",
        /// The request could not be expressed against the configured endpoint.
        InvalidRequest { message: String } =>
            "remote request invalid: {message}",
    }
}

impl RemoteTransportError {
    /// Whether retrying the same call might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }
}

/// Port for sending one request to the remote authority.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteTransport: Send + Sync {
    /// Send `request` and return the remote's response.
    ///
    /// Implementations never retry.
    async fn send(&self, request: RemoteRequest) -> Result<RemoteResponse, RemoteTransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn path_displays_with_leading_slashes() {
        assert_eq!(RemotePath::new(["analytics", "admin"]).to_string(), "/analytics/admin");
        assert_eq!(RemotePath::new(Vec::<String>::new()).to_string(), "");
    }

    #[test]
    fn constructors_set_method_and_body() {
        let request = RemoteRequest::post(RemotePath::new(["coupons"]), json!({ "code": "X" }))
            .with_query([("page", "1")]);
        assert_eq!(request.method, RemoteMethod::Post);
        assert_eq!(request.body, Some(json!({ "code": "X" })));
        assert_eq!(request.query, vec![("page".to_owned(), "1".to_owned())]);
        assert!(RemoteRequest::delete(RemotePath::new(["coupons", "1"])).body.is_none());
    }

    #[test]
    fn success_covers_2xx_only() {
        let response = |status| RemoteResponse {
            status,
            body: Value::Null,
        };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(302).is_success());
        assert!(!response(404).is_success());
    }

    #[test]
    fn only_connection_failures_are_retryable() {
        assert!(RemoteTransportError::timeout("slow").is_retryable());
        assert!(RemoteTransportError::transport("refused").is_retryable());
        assert!(!RemoteTransportError::decode("bad json").is_retryable());
        assert!(!RemoteTransportError::invalid_request("bad base").is_retryable());
    }
}
