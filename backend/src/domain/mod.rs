//! Domain primitives and services.
//!
//! Purpose: hold the transport-agnostic core of the gateway. Payload
//! validation and calendar arithmetic are pure; coupons, analytics and
//! submissions are delegated to the remote authority through the
//! [`ports::RemoteTransport`] port.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - TraceId: request-scoped correlation identifier.
//! - RemoteError: failed call to the remote authority.

pub mod analytics;
pub mod calendar;
pub mod coupons;
pub mod error;
pub mod ports;
pub mod remote;
pub mod submissions;
pub mod trace_id;
pub mod validation;

pub use self::analytics::{AnalyticsClient, AnalyticsReport};
pub use self::coupons::CouponClient;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::remote::RemoteError;
pub use self::submissions::SubmissionRelay;
pub use self::trace_id::TraceId;

/// HTTP header carrying the request's trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
