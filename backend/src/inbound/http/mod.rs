//! HTTP inbound adapter exposing REST endpoints.

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

pub mod analytics;
pub mod cache_control;
pub mod coupons;
pub mod error;
pub mod health;
pub(crate) mod relay;
pub mod schemas;
pub mod state;
pub mod submissions;
pub mod validation;

pub use error::{ApiResult, GatewayError, GatewayResult};

/// JSON extractor configuration rendering malformed bodies with the domain
/// error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

fn json_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = %req.path(), error = %err, "JSON body rejected");
    let error = match &err {
        JsonPayloadError::ContentType => {
            Error::invalid_request("content type must be application/json")
        }
        JsonPayloadError::Deserialize(inner) => Error::invalid_request(inner.to_string())
            .with_details(json!({ "code": "invalid_body" })),
        _ => Error::invalid_request("request body could not be read"),
    };
    error.into()
}
