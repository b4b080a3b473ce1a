//! Request payload validation.
//!
//! Each entity kind owns an immutable [`Schema`]: an ordered list of
//! [`FieldRule`]s interpreted by one evaluator. Evaluation stops at the first
//! violated rule, so a rejection always carries exactly one message. Fields a
//! schema does not declare are ignored.
//!
//! ```
//! use marketplace::domain::validation::{SchemaName, ValidationResult, validate};
//! use serde_json::json;
//!
//! let verdict = validate(SchemaName::WishlistItem, &json!({}));
//! assert_eq!(
//!     verdict.rejection().map(|r| r.message()),
//!     Some("\"productId\" is required")
//! );
//! assert!(validate(SchemaName::PayoutRequest, &json!({})).is_accepted());
//! ```

mod rules;
mod schemas;

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

pub use rules::{Constraint, FieldRule, Presence};
pub use schemas::TICKET_CATEGORIES;

/// The entity kinds with a validation schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaName {
    /// Support ticket submission.
    Ticket,
    /// Vendor onboarding application.
    VendorApplication,
    /// Partial update of the caller's profile.
    UserProfileUpdate,
    /// Product added to a wishlist.
    WishlistItem,
    /// Vendor payout request.
    PayoutRequest,
}

impl SchemaName {
    /// Every schema, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Ticket,
        Self::VendorApplication,
        Self::UserProfileUpdate,
        Self::WishlistItem,
        Self::PayoutRequest,
    ];

    /// Kebab-case identifier used in URLs and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ticket => "ticket",
            Self::VendorApplication => "vendor-application",
            Self::UserProfileUpdate => "user-profile-update",
            Self::WishlistItem => "wishlist-item",
            Self::PayoutRequest => "payout-request",
        }
    }

    /// The rule set for this entity kind.
    pub fn schema(self) -> &'static Schema {
        match self {
            Self::Ticket => &schemas::TICKET,
            Self::VendorApplication => &schemas::VENDOR_APPLICATION,
            Self::UserProfileUpdate => &schemas::USER_PROFILE_UPDATE,
            Self::WishlistItem => &schemas::WISHLIST_ITEM,
            Self::PayoutRequest => &schemas::PAYOUT_REQUEST,
        }
    }
}

impl fmt::Display for SchemaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string names no schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown schema: {0}")]
pub struct UnknownSchema(pub String);

impl FromStr for SchemaName {
    type Err = UnknownSchema;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownSchema(s.to_owned()))
    }
}

/// An immutable, ordered rule set for one entity kind.
#[derive(Debug)]
pub struct Schema {
    name: SchemaName,
    rules: &'static [FieldRule],
    accepts_any_payload: bool,
}

impl Schema {
    /// A schema enforcing `rules` in order on object payloads.
    pub const fn new(name: SchemaName, rules: &'static [FieldRule]) -> Self {
        Self {
            name,
            rules,
            accepts_any_payload: false,
        }
    }

    /// A schema that accepts every payload, objects or not.
    pub const fn permissive(name: SchemaName) -> Self {
        Self {
            name,
            rules: &[],
            accepts_any_payload: true,
        }
    }

    /// Entity kind this schema validates.
    pub fn name(&self) -> SchemaName {
        self.name
    }

    /// Declared rules in evaluation order.
    pub fn rules(&self) -> &'static [FieldRule] {
        self.rules
    }

    /// Whether every payload passes.
    pub fn accepts_any_payload(&self) -> bool {
        self.accepts_any_payload
    }

    /// Evaluate `payload` against this schema.
    pub fn validate(&self, payload: &Value) -> ValidationResult {
        if self.accepts_any_payload {
            return ValidationResult::Accepted;
        }
        let Some(fields) = payload.as_object() else {
            return ValidationResult::Rejected(Rejection::new(
                "value",
                "\"value\" must be of type object",
            ));
        };
        self.rules
            .iter()
            .find_map(|rule| rule.check(fields.get(rule.field())))
            .map_or(ValidationResult::Accepted, ValidationResult::Rejected)
    }
}

/// The first violated rule of a rejected payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    field: String,
    message: String,
}

impl Rejection {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Field whose rule failed.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Human-readable explanation, naming the field.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the rejection, returning its message.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Verdict for one payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every rule passed.
    Accepted,
    /// A rule failed; the payload must be corrected before resubmitting.
    Rejected(Rejection),
}

impl ValidationResult {
    /// Whether the payload passed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The rejection, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }

    /// Convert into a `Result` for `?` propagation.
    pub fn into_result(self) -> Result<(), Rejection> {
        match self {
            Self::Accepted => Ok(()),
            Self::Rejected(rejection) => Err(rejection),
        }
    }
}

/// Validate `payload` against the schema called `schema`.
///
/// Pure and deterministic: identical inputs always produce identical
/// verdicts.
pub fn validate(schema: SchemaName, payload: &Value) -> ValidationResult {
    schema.schema().validate(payload)
}

#[cfg(test)]
mod tests;
