//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request conflicts with current state.
    #[schema(rename = "conflict")]
    Conflict,
    /// The remote authority could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "service_unavailable")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "remote authority unavailable")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for validation rejections.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ValidationRejectionSchema {
    /// First violated rule, naming the field.
    #[schema(example = "\"subject\" length must be at least 5 characters long")]
    message: String,
}

/// OpenAPI schema for payout validation rejections.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PayoutRejectionSchema {
    /// Always `false`.
    #[schema(example = false)]
    success: bool,
    /// First violated rule, naming the field.
    message: String,
}

/// OpenAPI schema for [`crate::domain::coupons::Coupon`].
///
/// Remote-owned attributes beyond `id` and `code` are passed through
/// verbatim.
#[derive(ToSchema)]
#[schema(as = crate::domain::coupons::Coupon)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CouponSchema {
    /// Remote identifier.
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f6")]
    id: Option<String>,
    /// Unique redemption code.
    #[schema(example = "SAVE10")]
    code: Option<String>,
}

/// OpenAPI schema for [`crate::domain::coupons::CouponDefinition`].
#[derive(ToSchema)]
#[schema(as = crate::domain::coupons::CouponDefinition)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CouponDefinitionSchema {
    /// Unique redemption code; other attributes are forwarded verbatim.
    #[schema(example = "SAVE10")]
    code: String,
}

/// OpenAPI schema for [`crate::domain::coupons::CouponPage`].
#[derive(ToSchema)]
#[schema(as = crate::domain::coupons::CouponPage, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CouponPageSchema {
    /// Coupons on this page.
    items: Vec<CouponSchema>,
    /// 1-indexed page number.
    #[schema(example = 1, minimum = 1)]
    page: u32,
    /// Maximum items per page.
    #[schema(example = 10, minimum = 1)]
    limit: u32,
    /// Total coupons, when the remote reports it.
    total: Option<u64>,
    /// Total pages, when the remote reports it.
    total_pages: Option<u32>,
}

/// OpenAPI schema for [`crate::domain::coupons::CouponApplication`].
#[derive(ToSchema)]
#[schema(as = crate::domain::coupons::CouponApplication, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CouponApplicationSchema {
    /// Coupon code to apply.
    #[schema(example = "SAVE10")]
    code: String,
    /// Cart total before discount; finite and non-negative.
    #[schema(example = 100, minimum = 0)]
    cart_total: f64,
    /// Products in the cart.
    #[schema(example = json!(["p1", "p2"]))]
    product_ids: Vec<String>,
}
