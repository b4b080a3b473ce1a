//! Coupon HTTP handlers.
//!
//! ```text
//! GET    /api/v1/coupons?page=1&limit=10
//! POST   /api/v1/coupons
//! DELETE /api/v1/coupons/{id}
//! POST   /api/v1/coupons/apply
//! ```
//!
//! Each handler maps to one call on the remote authority. Remote status
//! failures are relayed unmodified through
//! [`GatewayError`](crate::inbound::http::GatewayError).

use actix_web::{HttpRequest, HttpResponse, delete, get, post, web};
use pagination::{PageRequest, PaginationError};
use serde_json::json;

use crate::domain::Error;
use crate::domain::coupons::{CouponApplication, CouponDefinition, CouponId};
use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::error::GatewayResult;
use crate::inbound::http::relay::relay_response;
use crate::inbound::http::schemas::{
    CouponApplicationSchema, CouponDefinitionSchema, CouponPageSchema, CouponSchema, ErrorSchema,
};
use crate::inbound::http::state::HttpState;

fn pagination_error(err: &PaginationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": err.field(),
        "code": "invalid_pagination",
    }))
}

/// List one page of coupons.
#[utoipa::path(
    get,
    path = "/api/v1/coupons",
    params(
        ("page" = Option<u32>, Query, description = "1-indexed page number, default 1"),
        ("limit" = Option<u32>, Query, description = "Page size, default 10")
    ),
    responses(
        (status = 200, description = "Coupons", body = CouponPageSchema),
        (status = 400, description = "Invalid pagination", body = ErrorSchema),
        (status = 503, description = "Remote authority unavailable", body = ErrorSchema)
    ),
    tags = ["coupons"],
    operation_id = "listCoupons"
)]
#[get("/coupons")]
pub async fn list_coupons(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> GatewayResult<HttpResponse> {
    let request =
        PageRequest::from_query(req.query_string()).map_err(|err| pagination_error(&err))?;
    let page = state.coupons.list_coupons(request).await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(page))
}

/// Create a coupon.
#[utoipa::path(
    post,
    path = "/api/v1/coupons",
    request_body = CouponDefinitionSchema,
    responses(
        (status = 201, description = "Coupon created", body = CouponSchema),
        (status = 400, description = "Invalid coupon definition", body = ErrorSchema),
        (status = 503, description = "Remote authority unavailable", body = ErrorSchema)
    ),
    tags = ["coupons"],
    operation_id = "createCoupon"
)]
#[post("/coupons")]
pub async fn create_coupon(
    state: web::Data<HttpState>,
    payload: web::Json<CouponDefinition>,
) -> GatewayResult<HttpResponse> {
    let created = state.coupons.create_coupon(&payload).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Delete a coupon.
#[utoipa::path(
    delete,
    path = "/api/v1/coupons/{id}",
    params(("id" = String, Path, description = "Remote coupon identifier")),
    responses(
        (status = 200, description = "Remote acknowledgement"),
        (status = 204, description = "Coupon deleted"),
        (status = 503, description = "Remote authority unavailable", body = ErrorSchema)
    ),
    tags = ["coupons"],
    operation_id = "deleteCoupon"
)]
#[delete("/coupons/{id}")]
pub async fn delete_coupon(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> GatewayResult<HttpResponse> {
    let id = CouponId::new(path.into_inner());
    let deletion = state.coupons.delete_coupon(&id).await?;
    let status = if deletion.as_value().is_null() {
        actix_web::http::StatusCode::NO_CONTENT
    } else {
        actix_web::http::StatusCode::OK
    };
    Ok(relay_response(status, deletion.as_value()))
}

/// Price a cart with a coupon.
///
/// The remote authority decides eligibility and discount, including what to
/// make of a blank code; its decision is returned unmodified.
#[utoipa::path(
    post,
    path = "/api/v1/coupons/apply",
    request_body = CouponApplicationSchema,
    responses(
        (status = 200, description = "Remote decision"),
        (status = 400, description = "Invalid application", body = ErrorSchema),
        (status = 503, description = "Remote authority unavailable", body = ErrorSchema)
    ),
    tags = ["coupons"],
    operation_id = "applyCoupon"
)]
#[post("/coupons/apply")]
pub async fn apply_coupon(
    state: web::Data<HttpState>,
    payload: web::Json<CouponApplication>,
) -> GatewayResult<HttpResponse> {
    let CouponApplication {
        code,
        cart_total,
        product_ids,
    } = payload.into_inner();
    let decision = state
        .coupons
        .apply_coupon(&code, cart_total, &product_ids)
        .await?;
    Ok(HttpResponse::Ok().json(decision))
}
