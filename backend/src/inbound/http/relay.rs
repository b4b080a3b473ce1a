//! Relay of remote responses to HTTP clients.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde_json::Value;

use crate::domain::ports::RemoteResponse;

/// Answer with `status` and the remote `body` unmodified.
///
/// A `Null` body, which the transport produces for empty remote bodies,
/// yields an empty response.
pub(crate) fn relay_response(status: StatusCode, body: &Value) -> HttpResponse {
    let mut builder = HttpResponse::build(status);
    if body.is_null() {
        builder.finish()
    } else {
        builder.json(body)
    }
}

/// Relay a complete remote response, whatever its status.
pub(crate) fn relay_remote(response: &RemoteResponse) -> HttpResponse {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
    relay_response(status, &response.body)
}
