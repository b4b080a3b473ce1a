//! Failures surfaced by the remote authority and shared response handling.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::ports::{RemoteRequest, RemoteResponse, RemoteTransport, RemoteTransportError};

/// A failed call to the remote authority.
///
/// `Status` carries the remote's own status and body so adapters can relay
/// them unmodified. Nothing in this crate retries; callers decide, guided by
/// [`RemoteError::is_retryable`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RemoteError {
    /// The remote answered with a non-2xx status.
    #[error("remote authority answered with status {status}")]
    Status { status: u16, body: Value },
    /// No usable response was received.
    #[error(transparent)]
    Transport(#[from] RemoteTransportError),
}

impl RemoteError {
    /// Whether retrying the same call might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::Transport(err) => err.is_retryable(),
        }
    }
}

/// Send `request` and keep the response only when it is a 2xx.
pub(crate) async fn send_expecting_success(
    transport: &dyn RemoteTransport,
    request: RemoteRequest,
) -> Result<RemoteResponse, RemoteError> {
    let method = request.method;
    let path = request.path.to_string();
    let response = transport.send(request).await.map_err(|err| {
        warn!(%method, %path, error = %err, "remote call failed");
        RemoteError::from(err)
    })?;

    if response.is_success() {
        debug!(%method, %path, status = response.status, "remote call succeeded");
        Ok(response)
    } else {
        debug!(%method, %path, status = response.status, "remote call rejected");
        Err(RemoteError::Status {
            status: response.status,
            body: response.body,
        })
    }
}

/// Decode a successful response body into `T`.
pub(crate) fn decode_body<T: DeserializeOwned>(body: Value, what: &str) -> Result<T, RemoteError> {
    serde_json::from_value(body).map_err(|err| {
        RemoteError::from(RemoteTransportError::decode(format!(
            "unexpected {what} payload: {err}"
        )))
    })
}
