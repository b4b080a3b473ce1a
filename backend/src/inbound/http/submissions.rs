//! Validated submission handlers.
//!
//! ```text
//! POST /api/v1/tickets
//! POST /api/v1/vendors/apply
//! PUT  /api/v1/users/profile
//! POST /api/v1/wishlist
//! POST /api/v1/payouts/request
//! POST /api/v1/validate/{schema}
//! ```
//!
//! Bodies are checked by the [`Validated`] extractor before any handler
//! runs; accepted bodies are forwarded unchanged and the remote response is
//! relayed whatever its status.

use actix_web::{HttpResponse, post, put, web};
use serde_json::json;

use crate::domain::Error;
use crate::domain::validation::{SchemaName, UnknownSchema};
use crate::inbound::http::error::{ApiResult, GatewayResult};
use crate::inbound::http::relay::relay_remote;
use crate::inbound::http::schemas::{ErrorSchema, PayoutRejectionSchema, ValidationRejectionSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{SchemaKind, Validated, kinds, validate_body};

async fn forward<S: SchemaKind>(
    state: &HttpState,
    body: Validated<S>,
) -> GatewayResult<HttpResponse> {
    let response = state.submissions.submit(S::NAME, body.into_inner()).await?;
    Ok(relay_remote(&response))
}

/// Open a support ticket.
#[utoipa::path(
    post,
    path = "/api/v1/tickets",
    request_body(content = serde_json::Value, description = "Ticket body"),
    responses(
        (status = 201, description = "Remote response, relayed"),
        (status = 400, description = "Rejected body", body = ValidationRejectionSchema),
        (status = 503, description = "Remote authority unavailable", body = ErrorSchema)
    ),
    tags = ["submissions"],
    operation_id = "createTicket"
)]
#[post("/tickets")]
pub async fn create_ticket(
    state: web::Data<HttpState>,
    body: Validated<kinds::Ticket>,
) -> GatewayResult<HttpResponse> {
    forward(&state, body).await
}

/// Apply to become a vendor.
#[utoipa::path(
    post,
    path = "/api/v1/vendors/apply",
    request_body(content = serde_json::Value, description = "Vendor application body"),
    responses(
        (status = 201, description = "Remote response, relayed"),
        (status = 400, description = "Rejected body", body = ValidationRejectionSchema),
        (status = 503, description = "Remote authority unavailable", body = ErrorSchema)
    ),
    tags = ["submissions"],
    operation_id = "applyAsVendor"
)]
#[post("/vendors/apply")]
pub async fn apply_as_vendor(
    state: web::Data<HttpState>,
    body: Validated<kinds::VendorApplication>,
) -> GatewayResult<HttpResponse> {
    forward(&state, body).await
}

/// Update the caller's profile.
#[utoipa::path(
    put,
    path = "/api/v1/users/profile",
    request_body(content = serde_json::Value, description = "Profile fields to change"),
    responses(
        (status = 200, description = "Remote response, relayed"),
        (status = 400, description = "Rejected body", body = ValidationRejectionSchema),
        (status = 503, description = "Remote authority unavailable", body = ErrorSchema)
    ),
    tags = ["submissions"],
    operation_id = "updateProfile"
)]
#[put("/users/profile")]
pub async fn update_profile(
    state: web::Data<HttpState>,
    body: Validated<kinds::UserProfileUpdate>,
) -> GatewayResult<HttpResponse> {
    forward(&state, body).await
}

/// Add a product to the caller's wishlist.
#[utoipa::path(
    post,
    path = "/api/v1/wishlist",
    request_body(content = serde_json::Value, description = "Wishlist item body"),
    responses(
        (status = 201, description = "Remote response, relayed"),
        (status = 400, description = "Rejected body", body = ValidationRejectionSchema),
        (status = 503, description = "Remote authority unavailable", body = ErrorSchema)
    ),
    tags = ["submissions"],
    operation_id = "addWishlistItem"
)]
#[post("/wishlist")]
pub async fn add_wishlist_item(
    state: web::Data<HttpState>,
    body: Validated<kinds::WishlistItem>,
) -> GatewayResult<HttpResponse> {
    forward(&state, body).await
}

/// Request a vendor payout.
#[utoipa::path(
    post,
    path = "/api/v1/payouts/request",
    request_body(content = serde_json::Value, description = "Payout request body"),
    responses(
        (status = 201, description = "Remote response, relayed"),
        (status = 400, description = "Body is not JSON", body = PayoutRejectionSchema),
        (status = 503, description = "Remote authority unavailable", body = ErrorSchema)
    ),
    tags = ["submissions"],
    operation_id = "requestPayout"
)]
#[post("/payouts/request")]
pub async fn request_payout(
    state: web::Data<HttpState>,
    body: Validated<kinds::PayoutRequest>,
) -> GatewayResult<HttpResponse> {
    forward(&state, body).await
}

/// Check a body against a named schema without forwarding it.
#[utoipa::path(
    post,
    path = "/api/v1/validate/{schema}",
    params(("schema" = String, Path, description = "Schema name, e.g. `vendor-application`")),
    request_body(content = serde_json::Value, description = "Candidate payload"),
    responses(
        (status = 204, description = "Payload accepted"),
        (status = 400, description = "Rejected body", body = ValidationRejectionSchema),
        (status = 404, description = "Unknown schema", body = ErrorSchema)
    ),
    tags = ["submissions"],
    operation_id = "validatePayload"
)]
#[post("/validate/{schema}")]
pub async fn validate_payload(
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let name = path.into_inner();
    let schema: SchemaName = name.parse().map_err(|err: UnknownSchema| {
        Error::not_found(err.to_string()).with_details(json!({
            "schemas": SchemaName::ALL.iter().map(|schema| schema.as_str()).collect::<Vec<_>>(),
        }))
    })?;
    match validate_body(schema, &body) {
        Ok(_) => Ok(HttpResponse::NoContent().finish()),
        Err(rejection) => Ok(actix_web::ResponseError::error_response(&rejection)),
    }
}
