//! Rule tables for each entity kind.

use super::{Constraint, FieldRule, Schema, SchemaName};

/// Categories a support ticket may be filed under.
pub const TICKET_CATEGORIES: &[&str] = &["technical", "billing", "general", "refund"];

pub(super) static TICKET: Schema = Schema::new(
    SchemaName::Ticket,
    &[
        FieldRule::required("subject", Constraint::length(5, 200)),
        FieldRule::required("category", Constraint::OneOf(TICKET_CATEGORIES)),
        FieldRule::required("message", Constraint::min_length(10)),
    ],
);

pub(super) static VENDOR_APPLICATION: Schema = Schema::new(
    SchemaName::VendorApplication,
    &[
        FieldRule::required("businessName", Constraint::length(3, 100)),
        FieldRule::required("description", Constraint::length(10, 500)),
    ],
);

pub(super) static USER_PROFILE_UPDATE: Schema = Schema::new(
    SchemaName::UserProfileUpdate,
    &[
        FieldRule::optional("name", Constraint::length(2, 50)),
        FieldRule::optional("avatar", Constraint::Uri),
    ],
);

pub(super) static WISHLIST_ITEM: Schema = Schema::new(
    SchemaName::WishlistItem,
    &[FieldRule::required("productId", Constraint::text())],
);

// TODO: replace with real payout rules (amount, destination account) once
// the payout controller defines its request body.
pub(super) static PAYOUT_REQUEST: Schema = Schema::permissive(SchemaName::PayoutRequest);
