//! Relay of validated submissions to the remote authority.
//!
//! Each entity kind maps to one remote route. Payloads are forwarded as
//! received; the remote response comes back whatever its status, so the
//! HTTP edge can relay it unmodified.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::ports::{
    RemoteMethod, RemotePath, RemoteRequest, RemoteResponse, RemoteTransport, SubmissionCommand,
};
use super::remote::RemoteError;
use super::validation::SchemaName;

/// Remote method and path receiving submissions of `schema`.
///
/// # Examples
/// ```
/// use marketplace::domain::ports::RemoteMethod;
/// use marketplace::domain::submissions::remote_route;
/// use marketplace::domain::validation::SchemaName;
///
/// let (method, path) = remote_route(SchemaName::UserProfileUpdate);
/// assert_eq!(method, RemoteMethod::Put);
/// assert_eq!(path.to_string(), "/users/profile");
/// ```
pub fn remote_route(schema: SchemaName) -> (RemoteMethod, RemotePath) {
    match schema {
        SchemaName::Ticket => (RemoteMethod::Post, RemotePath::new(["tickets"])),
        SchemaName::VendorApplication => {
            (RemoteMethod::Post, RemotePath::new(["vendors", "apply"]))
        }
        SchemaName::UserProfileUpdate => (RemoteMethod::Put, RemotePath::new(["users", "profile"])),
        SchemaName::WishlistItem => (RemoteMethod::Post, RemotePath::new(["wishlist"])),
        SchemaName::PayoutRequest => (RemoteMethod::Post, RemotePath::new(["payouts", "request"])),
    }
}

/// Forwards accepted payloads through a [`RemoteTransport`].
#[derive(Clone)]
pub struct SubmissionRelay {
    transport: Arc<dyn RemoteTransport>,
}

impl SubmissionRelay {
    /// Create a relay sending through `transport`.
    pub fn new(transport: Arc<dyn RemoteTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl SubmissionCommand for SubmissionRelay {
    async fn submit(
        &self,
        schema: SchemaName,
        payload: Value,
    ) -> Result<RemoteResponse, RemoteError> {
        let (method, path) = remote_route(schema);
        let request = match method {
            RemoteMethod::Put => RemoteRequest::put(path, payload),
            _ => RemoteRequest::post(path, payload),
        };
        let response = self.transport.send(request).await?;
        debug!(%schema, status = response.status, "relayed submission");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockRemoteTransport, RemoteTransportError};
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::ticket(SchemaName::Ticket, "/tickets")]
    #[case::vendor(SchemaName::VendorApplication, "/vendors/apply")]
    #[case::wishlist(SchemaName::WishlistItem, "/wishlist")]
    #[case::payout(SchemaName::PayoutRequest, "/payouts/request")]
    fn creations_are_posted(#[case] schema: SchemaName, #[case] path: &str) {
        let (method, remote_path) = remote_route(schema);
        assert_eq!(method, RemoteMethod::Post);
        assert_eq!(remote_path.to_string(), path);
    }

    #[tokio::test]
    async fn payload_is_forwarded_and_any_status_returned() {
        let payload = json!({ "productId": "p-1" });
        let mut transport = MockRemoteTransport::new();
        transport
            .expect_send()
            .with(eq(RemoteRequest::post(
                RemotePath::new(["wishlist"]),
                payload.clone(),
            )))
            .times(1)
            .return_once(|_| {
                Ok(RemoteResponse {
                    status: 409,
                    body: json!({ "message": "Already in wishlist" }),
                })
            });
        let relay = SubmissionRelay::new(Arc::new(transport));

        let response = relay
            .submit(SchemaName::WishlistItem, payload)
            .await
            .expect("remote answered");

        assert_eq!(response.status, 409);
        assert_eq!(response.body, json!({ "message": "Already in wishlist" }));
    }

    #[tokio::test]
    async fn profile_updates_use_put() {
        let mut transport = MockRemoteTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.method == RemoteMethod::Put && request.path.to_string() == "/users/profile"
            })
            .times(1)
            .return_once(|_| Err(RemoteTransportError::transport("connection refused")));
        let relay = SubmissionRelay::new(Arc::new(transport));

        let err = relay
            .submit(SchemaName::UserProfileUpdate, json!({ "name": "Jo" }))
            .await
            .expect_err("transport failed");

        assert!(matches!(err, RemoteError::Transport(_)));
    }
}
