//! Analytics reports passed through from the remote authority.
//!
//! Reports are aggregated remotely; this module only fetches and relays them.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ports::{AnalyticsQuery, RemotePath, RemoteRequest, RemoteTransport};
use super::remote::{RemoteError, send_expecting_success};

/// A report body exactly as the remote produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalyticsReport(Value);

impl AnalyticsReport {
    /// Wrap a remote report body.
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// Raw report body.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the report, returning the raw body.
    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Analytics client backed by the remote authority.
#[derive(Clone)]
pub struct AnalyticsClient {
    transport: Arc<dyn RemoteTransport>,
}

impl AnalyticsClient {
    /// Create a client sending through `transport`.
    pub fn new(transport: Arc<dyn RemoteTransport>) -> Self {
        Self { transport }
    }

    async fn fetch(&self, scope: &str) -> Result<AnalyticsReport, RemoteError> {
        let request = RemoteRequest::get(RemotePath::new(["analytics", scope]));
        let response = send_expecting_success(self.transport.as_ref(), request).await?;
        Ok(AnalyticsReport::new(response.body))
    }
}

#[async_trait]
impl AnalyticsQuery for AnalyticsClient {
    async fn admin_analytics(&self) -> Result<AnalyticsReport, RemoteError> {
        self.fetch("admin").await
    }

    async fn vendor_analytics(&self) -> Result<AnalyticsReport, RemoteError> {
        self.fetch("vendor").await
    }
}
