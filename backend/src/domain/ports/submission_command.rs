//! Driving port for forwarding validated submissions.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::RemoteError;
use crate::domain::ports::RemoteResponse;
use crate::domain::validation::SchemaName;

/// Domain use-case port relaying accepted payloads to the remote authority.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionCommand: Send + Sync {
    /// Forward `payload`, already accepted by `schema`, and return the
    /// remote's response whatever its status.
    async fn submit(&self, schema: SchemaName, payload: Value)
    -> Result<RemoteResponse, RemoteError>;
}
