//! Coupon client delegating to the remote authority.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{
    CartTotal, Coupon, CouponApplication, CouponDecision, CouponDefinition, CouponDeletion,
    CouponId, CouponPage, CreatedCoupon,
};
use crate::domain::ports::{
    CouponCommand, RemotePath, RemoteRequest, RemoteTransport, RemoteTransportError,
};
use crate::domain::remote::{RemoteError, decode_body, send_expecting_success};

/// Coupon operations backed by the remote authority.
///
/// Every operation issues exactly one remote call and never retries.
#[derive(Clone)]
pub struct CouponClient {
    transport: Arc<dyn RemoteTransport>,
}

impl CouponClient {
    /// Create a client sending through `transport`.
    pub fn new(transport: Arc<dyn RemoteTransport>) -> Self {
        Self { transport }
    }

    fn coupons_path<const N: usize>(tail: [&str; N]) -> RemotePath {
        RemotePath::new(std::iter::once("coupons").chain(tail))
    }
}

/// List bodies seen from the remote: an envelope or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CouponListBody {
    Envelope(CouponListEnvelope),
    Bare(Vec<Coupon>),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CouponListEnvelope {
    #[serde(alias = "data", alias = "items")]
    coupons: Vec<Coupon>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default, alias = "total_pages", alias = "pages")]
    total_pages: Option<u32>,
}

/// Create bodies seen from the remote: `{ "coupon": .. }`, `{ "data": .. }`
/// or the coupon itself.
#[derive(Debug, Deserialize)]
struct WrappedCoupon {
    #[serde(alias = "data")]
    coupon: Coupon,
}

fn created_coupon(body: Value) -> CreatedCoupon {
    if let Ok(WrappedCoupon { coupon }) = serde_json::from_value(body.clone()) {
        return CreatedCoupon::Coupon(coupon);
    }
    serde_json::from_value(body.clone())
        .map_or(CreatedCoupon::Acknowledgement(body), CreatedCoupon::Coupon)
}

fn to_body<T: serde::Serialize>(value: &T, what: &str) -> Result<Value, RemoteError> {
    serde_json::to_value(value).map_err(|err| {
        RemoteError::from(RemoteTransportError::invalid_request(format!(
            "cannot encode {what}: {err}"
        )))
    })
}

#[async_trait]
impl CouponCommand for CouponClient {
    async fn list_coupons(&self, request: PageRequest) -> Result<CouponPage, RemoteError> {
        let remote = RemoteRequest::get(Self::coupons_path([])).with_query(request.query_pairs());
        let response = send_expecting_success(self.transport.as_ref(), remote).await?;

        let page = match decode_body::<CouponListBody>(response.body, "coupon list")? {
            CouponListBody::Envelope(envelope) => Page::new(envelope.coupons, request)
                .with_totals(envelope.total, envelope.total_pages),
            CouponListBody::Bare(coupons) => Page::new(coupons, request),
        };
        debug!(
            page = request.page(),
            limit = request.limit(),
            count = page.items().len(),
            "listed coupons"
        );
        Ok(page)
    }

    async fn create_coupon(
        &self,
        definition: &CouponDefinition,
    ) -> Result<CreatedCoupon, RemoteError> {
        let body = to_body(definition, "coupon definition")?;
        let response = send_expecting_success(
            self.transport.as_ref(),
            RemoteRequest::post(Self::coupons_path([]), body),
        )
        .await?;

        let created = created_coupon(response.body);
        debug!(
            coupon_id = created.coupon().and_then(|c| c.id.as_ref()).map(CouponId::as_str),
            status = response.status,
            "created coupon"
        );
        Ok(created)
    }

    async fn delete_coupon(&self, id: &CouponId) -> Result<CouponDeletion, RemoteError> {
        let response = send_expecting_success(
            self.transport.as_ref(),
            RemoteRequest::delete(Self::coupons_path([id.as_str()])),
        )
        .await?;
        debug!(coupon_id = %id, "deleted coupon");
        Ok(CouponDeletion::new(response.body))
    }

    async fn apply_coupon(
        &self,
        code: &str,
        cart_total: CartTotal,
        product_ids: &[String],
    ) -> Result<CouponDecision, RemoteError> {
        let application = CouponApplication {
            code: code.to_owned(),
            cart_total,
            product_ids: product_ids.to_vec(),
        };
        let body = to_body(&application, "coupon application")?;
        let response = send_expecting_success(
            self.transport.as_ref(),
            RemoteRequest::post(Self::coupons_path(["apply"]), body),
        )
        .await?;
        Ok(CouponDecision::new(response.body))
    }
}
