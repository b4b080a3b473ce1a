//! Behavioural coverage for the entity schemas.

use super::*;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

fn rejection_message(schema: SchemaName, payload: &Value) -> Option<String> {
    validate(schema, payload)
        .rejection()
        .map(|rejection| rejection.message().to_owned())
}

#[fixture]
fn ticket() -> Value {
    json!({
        "subject": "Help me please",
        "category": "technical",
        "message": "Need assistance please",
    })
}

#[fixture]
fn vendor_application() -> Value {
    json!({
        "businessName": "Acme Goods",
        "description": "Handmade kitchenware from reclaimed oak.",
    })
}

#[rstest]
fn well_formed_ticket_is_accepted(ticket: Value) {
    assert_eq!(validate(SchemaName::Ticket, &ticket), ValidationResult::Accepted);
}

#[rstest]
fn short_ticket_subject_is_rejected(mut ticket: Value) {
    ticket["subject"] = json!("Help");
    assert_eq!(
        rejection_message(SchemaName::Ticket, &ticket).as_deref(),
        Some("\"subject\" length must be at least 5 characters long")
    );
}

#[rstest]
fn long_ticket_subject_is_rejected(mut ticket: Value) {
    ticket["subject"] = json!("x".repeat(201));
    assert_eq!(
        rejection_message(SchemaName::Ticket, &ticket).as_deref(),
        Some("\"subject\" length must be less than or equal to 200 characters long")
    );
    ticket["subject"] = json!("x".repeat(200));
    assert!(validate(SchemaName::Ticket, &ticket).is_accepted());
}

#[rstest]
#[case::refund("refund")]
#[case::billing("billing")]
#[case::general("general")]
#[case::technical("technical")]
fn every_ticket_category_is_accepted(mut ticket: Value, #[case] category: &str) {
    ticket["category"] = json!(category);
    assert!(validate(SchemaName::Ticket, &ticket).is_accepted());
}

#[rstest]
#[case::unknown(json!("shipping"))]
#[case::wrong_case(json!("Technical"))]
#[case::empty(json!(""))]
#[case::number(json!(1))]
fn unknown_ticket_category_is_rejected(mut ticket: Value, #[case] category: Value) {
    ticket["category"] = category;
    assert_eq!(
        rejection_message(SchemaName::Ticket, &ticket).as_deref(),
        Some("\"category\" must be one of [technical, billing, general, refund]")
    );
}

#[rstest]
fn short_ticket_message_is_rejected(mut ticket: Value) {
    ticket["message"] = json!("too short");
    assert_eq!(
        rejection_message(SchemaName::Ticket, &ticket).as_deref(),
        Some("\"message\" length must be at least 10 characters long")
    );
}

#[rstest]
fn first_violation_in_declared_order_wins() {
    let payload = json!({ "subject": "Hi", "category": "nope" });
    let verdict = validate(SchemaName::Ticket, &payload);
    assert_eq!(verdict.rejection().map(Rejection::field), Some("subject"));
}

#[rstest]
#[case::ticket_subject(SchemaName::Ticket, "subject")]
#[case::ticket_category(SchemaName::Ticket, "category")]
#[case::ticket_message(SchemaName::Ticket, "message")]
#[case::vendor_name(SchemaName::VendorApplication, "businessName")]
#[case::vendor_description(SchemaName::VendorApplication, "description")]
#[case::wishlist_product(SchemaName::WishlistItem, "productId")]
fn missing_required_field_is_cited(
    ticket: Value,
    vendor_application: Value,
    #[case] schema: SchemaName,
    #[case] field: &str,
) {
    let mut payload = match schema {
        SchemaName::Ticket => ticket,
        SchemaName::VendorApplication => vendor_application,
        _ => json!({ "productId": "p-1" }),
    };
    payload.as_object_mut().expect("fixture is an object").remove(field);

    let verdict = validate(schema, &payload);
    let rejection = verdict.rejection().expect("payload is missing a field");
    assert_eq!(rejection.field(), field);
    assert_eq!(rejection.message(), format!("\"{field}\" is required"));
}

#[rstest]
#[case::below(9, false)]
#[case::lower_bound(10, true)]
#[case::upper_bound(500, true)]
#[case::above(501, false)]
fn vendor_description_bounds_are_inclusive(
    mut vendor_application: Value,
    #[case] length: usize,
    #[case] accepted: bool,
) {
    vendor_application["description"] = json!("d".repeat(length));
    assert_eq!(
        validate(SchemaName::VendorApplication, &vendor_application).is_accepted(),
        accepted
    );
}

#[rstest]
#[case::short("AB", false)]
#[case::lower_bound("ABC", true)]
fn vendor_business_name_bounds(
    mut vendor_application: Value,
    #[case] name: &str,
    #[case] accepted: bool,
) {
    vendor_application["businessName"] = json!(name);
    assert_eq!(
        validate(SchemaName::VendorApplication, &vendor_application).is_accepted(),
        accepted
    );
}

#[rstest]
#[case::empty(json!({}))]
#[case::name_only(json!({ "name": "Jo" }))]
#[case::avatar_only(json!({ "avatar": "https://cdn.example.com/a.png" }))]
#[case::unknown_fields(json!({ "bio": 12, "theme": null }))]
fn profile_update_fields_are_optional(#[case] payload: Value) {
    assert!(validate(SchemaName::UserProfileUpdate, &payload).is_accepted());
}

#[rstest]
fn profile_avatar_must_be_a_uri() {
    assert_eq!(
        rejection_message(SchemaName::UserProfileUpdate, &json!({ "avatar": "not-a-url" }))
            .as_deref(),
        Some("\"avatar\" must be a valid uri")
    );
}

#[rstest]
#[case::short(json!({ "name": "J" }), "\"name\" length must be at least 2 characters long")]
#[case::long(
    json!({ "name": "n".repeat(51) }),
    "\"name\" length must be less than or equal to 50 characters long"
)]
#[case::empty(json!({ "name": "" }), "\"name\" is not allowed to be empty")]
fn profile_name_bounds(#[case] payload: Value, #[case] expected: &str) {
    assert_eq!(
        rejection_message(SchemaName::UserProfileUpdate, &payload).as_deref(),
        Some(expected)
    );
}

#[rstest]
fn empty_wishlist_item_is_rejected() {
    assert_eq!(
        rejection_message(SchemaName::WishlistItem, &json!({})).as_deref(),
        Some("\"productId\" is required")
    );
}

#[rstest]
fn blank_wishlist_product_id_is_rejected() {
    assert_eq!(
        rejection_message(SchemaName::WishlistItem, &json!({ "productId": "" })).as_deref(),
        Some("\"productId\" is not allowed to be empty")
    );
}

#[rstest]
#[case::empty(json!({}))]
#[case::unknown_fields(json!({ "amount": -5, "iban": null }))]
#[case::not_an_object(json!("anything"))]
#[case::null(Value::Null)]
fn payout_request_accepts_everything(#[case] payload: Value) {
    assert!(validate(SchemaName::PayoutRequest, &payload).is_accepted());
}

#[rstest]
#[case::array(json!([]))]
#[case::string(json!("ticket"))]
#[case::null(Value::Null)]
fn non_object_payloads_are_rejected(#[case] payload: Value) {
    assert_eq!(
        rejection_message(SchemaName::Ticket, &payload).as_deref(),
        Some("\"value\" must be of type object")
    );
}

#[rstest]
fn unknown_fields_are_ignored(mut ticket: Value) {
    ticket["priority"] = json!("urgent");
    ticket["attachments"] = json!([1, 2, 3]);
    assert!(validate(SchemaName::Ticket, &ticket).is_accepted());
}

#[rstest]
fn validation_is_deterministic(ticket: Value) {
    let payloads = [ticket, json!({ "subject": "Help" }), json!([])];
    for schema in SchemaName::ALL {
        for payload in &payloads {
            assert_eq!(validate(schema, payload), validate(schema, payload));
        }
    }
}

#[rstest]
fn schema_names_round_trip_through_strings() {
    for schema in SchemaName::ALL {
        assert_eq!(schema.as_str().parse::<SchemaName>(), Ok(schema));
        assert_eq!(schema.schema().name(), schema);
    }
    assert_eq!(
        "coupon".parse::<SchemaName>(),
        Err(UnknownSchema("coupon".to_owned()))
    );
}

#[rstest]
fn only_the_payout_schema_is_permissive() {
    for schema in SchemaName::ALL {
        let permissive = schema.schema().accepts_any_payload();
        assert_eq!(permissive, schema == SchemaName::PayoutRequest);
        assert_eq!(permissive, schema.schema().rules().is_empty());
    }
}
