//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AnalyticsQuery, CouponCommand, RemoteTransport, SubmissionCommand};
use crate::domain::{AnalyticsClient, CouponClient, SubmissionRelay};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub coupons: Arc<dyn CouponCommand>,
    pub analytics: Arc<dyn AnalyticsQuery>,
    pub submissions: Arc<dyn SubmissionCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        coupons: Arc<dyn CouponCommand>,
        analytics: Arc<dyn AnalyticsQuery>,
        submissions: Arc<dyn SubmissionCommand>,
    ) -> Self {
        Self {
            coupons,
            analytics,
            submissions,
        }
    }

    /// Wire every port to the domain clients sharing one remote transport.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// use marketplace::inbound::http::state::HttpState;
    /// use marketplace::outbound::remote::HttpRemoteTransport;
    ///
    /// let base = "http://127.0.0.1:5000/api".parse().expect("valid URL");
    /// let transport = HttpRemoteTransport::new(base, Duration::from_secs(10))
    ///     .expect("transport builds");
    /// let state = HttpState::from_transport(Arc::new(transport));
    /// let _coupons = state.coupons.clone();
    /// ```
    pub fn from_transport(transport: Arc<dyn RemoteTransport>) -> Self {
        Self::new(
            Arc::new(CouponClient::new(Arc::clone(&transport))),
            Arc::new(AnalyticsClient::new(Arc::clone(&transport))),
            Arc::new(SubmissionRelay::new(transport)),
        )
    }
}
