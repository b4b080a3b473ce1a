//! Driving port for coupon operations.
//!
//! HTTP handlers call this port; the domain [`crate::domain::CouponClient`]
//! implements it by delegating every operation to the remote authority.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::RemoteError;
use crate::domain::coupons::{
    CartTotal, CouponDecision, CouponDefinition, CouponDeletion, CouponId, CouponPage,
    CreatedCoupon,
};

/// Domain use-case port for coupons.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CouponCommand: Send + Sync {
    /// List one page of coupons.
    async fn list_coupons(&self, request: PageRequest) -> Result<CouponPage, RemoteError>;

    /// Create a coupon from `definition`.
    async fn create_coupon(
        &self,
        definition: &CouponDefinition,
    ) -> Result<CreatedCoupon, RemoteError>;

    /// Delete the coupon identified by `id`.
    async fn delete_coupon(&self, id: &CouponId) -> Result<CouponDeletion, RemoteError>;

    /// Ask the remote authority to price a cart with `code`.
    async fn apply_coupon(
        &self,
        code: &str,
        cart_total: CartTotal,
        product_ids: &[String],
    ) -> Result<CouponDecision, RemoteError>;
}
