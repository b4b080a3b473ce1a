//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod analytics_query;
mod coupon_command;
mod remote_transport;
mod submission_command;

#[cfg(test)]
pub use analytics_query::MockAnalyticsQuery;
pub use analytics_query::AnalyticsQuery;
#[cfg(test)]
pub use coupon_command::MockCouponCommand;
pub use coupon_command::CouponCommand;
#[cfg(test)]
pub use remote_transport::MockRemoteTransport;
pub use remote_transport::{
    RemoteMethod, RemotePath, RemoteRequest, RemoteResponse, RemoteTransport,
    RemoteTransportError,
};
#[cfg(test)]
pub use submission_command::MockSubmissionCommand;
pub use submission_command::SubmissionCommand;
