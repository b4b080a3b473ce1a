//! Driving port for analytics reports.

use async_trait::async_trait;

use crate::domain::RemoteError;
use crate::domain::analytics::AnalyticsReport;

/// Domain use-case port for analytics pass-through.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsQuery: Send + Sync {
    /// Marketplace-wide report for administrators.
    async fn admin_analytics(&self) -> Result<AnalyticsReport, RemoteError>;

    /// Report scoped to the calling vendor.
    async fn vendor_analytics(&self) -> Result<AnalyticsReport, RemoteError>;
}
