//! Validation boundary for inbound JSON bodies.
//!
//! Handlers declare the schema their body must satisfy by taking a
//! [`Validated<S>`] argument. The extractor reads the raw body, runs the
//! domain validator and short-circuits with `400 Bad Request` before the
//! handler runs when the payload is rejected:
//!
//! ```text
//! { "message": "\"subject\" length must be at least 5 characters long" }
//! ```
//!
//! Payout requests answer `{ "success": false, "message": .. }` instead, as
//! the payout client expects.

use std::marker::PhantomData;

use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, web};
use futures_util::future::LocalBoxFuture;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::validation::{SchemaName, validate};

/// Compile-time marker naming the schema a [`Validated`] body must satisfy.
pub trait SchemaKind: 'static {
    /// Schema applied to the body.
    const NAME: SchemaName;
}

/// Marker types for each entity schema.
pub mod kinds {
    use super::{SchemaKind, SchemaName};

    macro_rules! schema_kind {
        ($($(#[$meta:meta])* $kind:ident => $name:ident),* $(,)?) => {
            $(
                $(#[$meta])*
                #[derive(Debug, Clone, Copy)]
                pub struct $kind;

                impl SchemaKind for $kind {
                    const NAME: SchemaName = SchemaName::$name;
                }
            )*
        };
    }

    schema_kind! {
        /// Support ticket body.
        Ticket => Ticket,
        /// Vendor application body.
        VendorApplication => VendorApplication,
        /// Profile update body.
        UserProfileUpdate => UserProfileUpdate,
        /// Wishlist item body.
        WishlistItem => WishlistItem,
        /// Payout request body.
        PayoutRequest => PayoutRequest,
    }
}

/// A JSON body accepted by the schema named by `S`.
#[derive(Debug)]
pub struct Validated<S> {
    payload: Value,
    _schema: PhantomData<S>,
}

impl<S: SchemaKind> Validated<S> {
    /// Schema the payload satisfied.
    pub fn schema(&self) -> SchemaName {
        S::NAME
    }

    /// Accepted payload, unchanged.
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Consume the extractor, returning the payload.
    pub fn into_inner(self) -> Value {
        self.payload
    }
}

impl<S: SchemaKind> FromRequest for Validated<S> {
    type Error = ValidationRejection;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = web::Bytes::from_request(req, payload);
        Box::pin(async move {
            let bytes = body.await.map_err(|err| {
                ValidationRejection::new(S::NAME, format!("request body could not be read: {err}"))
            })?;
            let payload = validate_body(S::NAME, &bytes)?;
            Ok(Self {
                payload,
                _schema: PhantomData,
            })
        })
    }
}

/// Parse `body` as JSON and validate it against `schema`.
///
/// An empty body is treated as an empty object, so required-field rules
/// report the missing field rather than a parse failure.
pub(crate) fn validate_body(schema: SchemaName, body: &[u8]) -> Result<Value, ValidationRejection> {
    let payload = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice(body).map_err(|err| {
            debug!(%schema, error = %err, "request body is not JSON");
            ValidationRejection::new(schema, "request body must be valid JSON")
        })?
    };

    validate(schema, &payload).into_result().map_err(|rejection| {
        debug!(%schema, field = rejection.field(), "payload rejected");
        ValidationRejection::new(schema, rejection.into_message())
    })?;
    Ok(payload)
}

/// A payload refused at the validation boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationRejection {
    schema: SchemaName,
    message: String,
}

#[derive(Serialize)]
struct RejectionBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    success: Option<bool>,
    message: &'a str,
}

impl ValidationRejection {
    pub(crate) fn new(schema: SchemaName, message: impl Into<String>) -> Self {
        Self {
            schema,
            message: message.into(),
        }
    }

    /// Schema that refused the payload.
    pub fn schema(&self) -> SchemaName {
        self.schema
    }

    /// Message returned to the client.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ResponseError for ValidationRejection {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        let success = matches!(self.schema, SchemaName::PayoutRequest).then_some(false);
        HttpResponse::build(self.status_code()).json(RejectionBody {
            success,
            message: &self.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::json;

    async fn echo(body: Validated<kinds::WishlistItem>) -> HttpResponse {
        HttpResponse::Ok().json(body.into_inner())
    }

    #[rstest]
    #[case::empty(b"".as_slice(), "\"productId\" is required")]
    #[case::empty_object(b"{}".as_slice(), "\"productId\" is required")]
    #[case::not_json(b"productId=1".as_slice(), "request body must be valid JSON")]
    #[case::array(b"[]".as_slice(), "\"value\" must be of type object")]
    fn rejects_bodies_with_one_message(#[case] body: &[u8], #[case] expected: &str) {
        let rejection =
            validate_body(SchemaName::WishlistItem, body).expect_err("body is rejected");
        assert_eq!(rejection.message(), expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn payout_rejections_carry_a_success_flag() {
        let response =
            ValidationRejection::new(SchemaName::PayoutRequest, "bad payout").error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body()).await.expect("body");
        let body: Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(body, json!({ "success": false, "message": "bad payout" }));
    }

    #[rstest]
    #[actix_web::test]
    async fn extractor_passes_accepted_payloads_through() {
        let app = actix_test::init_service(App::new().route("/", web::post().to(echo))).await;
        let payload = json!({ "productId": "p-1", "note": "gift" });
        let req = actix_test::TestRequest::post()
            .uri("/")
            .set_json(&payload)
            .to_request();

        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, payload);
    }

    #[rstest]
    #[actix_web::test]
    async fn extractor_short_circuits_rejected_payloads() {
        let app = actix_test::init_service(App::new().route("/", web::post().to(echo))).await;
        let req = actix_test::TestRequest::post()
            .uri("/")
            .set_json(json!({ "productId": "" }))
            .to_request();

        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({ "message": "\"productId\" is not allowed to be empty" })
        );
    }
}
