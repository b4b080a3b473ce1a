//! Analytics HTTP handlers.
//!
//! ```text
//! GET /api/v1/analytics/admin
//! GET /api/v1/analytics/vendor
//! ```

use actix_web::{HttpResponse, get, web};

use crate::inbound::http::cache_control::private_no_cache_header;
use crate::inbound::http::error::GatewayResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Marketplace-wide analytics report.
#[utoipa::path(
    get,
    path = "/api/v1/analytics/admin",
    responses(
        (status = 200, description = "Admin analytics report"),
        (status = 503, description = "Remote authority unavailable", body = ErrorSchema)
    ),
    tags = ["analytics"],
    operation_id = "adminAnalytics"
)]
#[get("/analytics/admin")]
pub async fn admin_analytics(state: web::Data<HttpState>) -> GatewayResult<HttpResponse> {
    let report = state.analytics.admin_analytics().await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(report))
}

/// Analytics report for the calling vendor.
#[utoipa::path(
    get,
    path = "/api/v1/analytics/vendor",
    responses(
        (status = 200, description = "Vendor analytics report"),
        (status = 503, description = "Remote authority unavailable", body = ErrorSchema)
    ),
    tags = ["analytics"],
    operation_id = "vendorAnalytics"
)]
#[get("/analytics/vendor")]
pub async fn vendor_analytics(state: web::Data<HttpState>) -> GatewayResult<HttpResponse> {
    let report = state.analytics.vendor_analytics().await?;
    Ok(HttpResponse::Ok()
        .insert_header(private_no_cache_header())
        .json(report))
}
