//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers from [`crate::inbound::http::schemas`], so domain
//! types stay free of utoipa derives. The document backs Swagger UI in debug
//! builds.

use crate::inbound::http::schemas::{
    CouponApplicationSchema, CouponDefinitionSchema, CouponPageSchema, CouponSchema,
    ErrorCodeSchema, ErrorSchema, PayoutRejectionSchema, ValidationRejectionSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marketplace gateway API",
        description = "Validation boundary and relay in front of the marketplace's remote \
                       authority."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::coupons::list_coupons,
        crate::inbound::http::coupons::create_coupon,
        crate::inbound::http::coupons::delete_coupon,
        crate::inbound::http::coupons::apply_coupon,
        crate::inbound::http::analytics::admin_analytics,
        crate::inbound::http::analytics::vendor_analytics,
        crate::inbound::http::submissions::create_ticket,
        crate::inbound::http::submissions::apply_as_vendor,
        crate::inbound::http::submissions::update_profile,
        crate::inbound::http::submissions::add_wishlist_item,
        crate::inbound::http::submissions::request_payout,
        crate::inbound::http::submissions::validate_payload,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        ValidationRejectionSchema,
        PayoutRejectionSchema,
        CouponSchema,
        CouponDefinitionSchema,
        CouponPageSchema,
        CouponApplicationSchema
    )),
    tags(
        (name = "coupons", description = "Coupons owned by the remote authority"),
        (name = "analytics", description = "Reports computed by the remote authority"),
        (name = "submissions", description = "Validated bodies relayed to the remote authority"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[rstest]
    #[case("/api/v1/coupons")]
    #[case("/api/v1/coupons/{id}")]
    #[case("/api/v1/coupons/apply")]
    #[case("/api/v1/analytics/admin")]
    #[case("/api/v1/analytics/vendor")]
    #[case("/api/v1/tickets")]
    #[case("/api/v1/vendors/apply")]
    #[case("/api/v1/users/profile")]
    #[case("/api/v1/wishlist")]
    #[case("/api/v1/payouts/request")]
    #[case("/api/v1/validate/{schema}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}
