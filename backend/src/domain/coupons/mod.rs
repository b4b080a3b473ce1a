//! Coupons owned by the remote authority.
//!
//! Purpose: carry coupon definitions and application decisions between the
//! HTTP edge and the remote authority without interpreting them. Discount
//! arithmetic and eligibility stay remote; this module only shapes requests
//! and gives read-only access to well-known response fields.

use std::fmt;

use pagination::Page;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

pub mod service;

pub use service::CouponClient;

/// Page of coupons as listed by the remote authority.
pub type CouponPage = Page<Coupon>;

/// Remote-assigned coupon identifier.
///
/// The remote may encode identifiers as strings or numbers; both are held as
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CouponId(String);

impl CouponId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CouponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CouponId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(Number),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Text(text) if text.is_empty() => {
                Err(D::Error::custom("coupon id must not be empty"))
            }
            RawId::Text(text) => Ok(Self(text)),
            RawId::Number(number) => Ok(Self(number.to_string())),
        }
    }
}

/// A coupon as stored by the remote authority.
///
/// Attributes beyond the identifier and code (discount definition, validity
/// window, usage limits) are remote-owned and kept verbatim. The identifier
/// and code are optional so a partial record never fails a whole listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    /// Remote identifier; also accepted as `_id`.
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<CouponId>,
    /// Unique redemption code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Remaining remote-owned attributes.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Remote answer to a coupon creation.
///
/// A body that does not look like a coupon is still a success and is kept
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CreatedCoupon {
    /// The created coupon, unwrapped from any `coupon` or `data` envelope.
    Coupon(Coupon),
    /// Any other success body.
    Acknowledgement(Value),
}

impl CreatedCoupon {
    /// The created coupon, when the remote returned one.
    pub fn coupon(&self) -> Option<&Coupon> {
        match self {
            Self::Coupon(coupon) => Some(coupon),
            Self::Acknowledgement(_) => None,
        }
    }
}

/// Coupon submitted for creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponDefinition {
    /// Unique redemption code.
    pub code: String,
    /// Discount definition and constraints, forwarded verbatim.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Raised when a cart total is negative or not a finite number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cart total must be a finite, non-negative number")]
pub struct CartTotalError;

/// Cart total submitted with a coupon application.
///
/// Keeps the caller's numeric representation, so `100` is forwarded as `100`
/// rather than `100.0`.
///
/// # Examples
/// ```
/// use marketplace::domain::coupons::CartTotal;
///
/// let total = CartTotal::from(100_u64);
/// assert_eq!(serde_json::to_string(&total).unwrap(), "100");
/// assert!(CartTotal::try_from(-1.5_f64).is_err());
/// assert!(CartTotal::try_from(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Number", into = "Number")]
pub struct CartTotal(Number);

impl CartTotal {
    /// Total as a float.
    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or_default()
    }
}

impl From<CartTotal> for Number {
    fn from(value: CartTotal) -> Self {
        value.0
    }
}

impl From<u64> for CartTotal {
    fn from(value: u64) -> Self {
        Self(Number::from(value))
    }
}

impl TryFrom<f64> for CartTotal {
    type Error = CartTotalError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Number::from_f64(value)
            .ok_or(CartTotalError)
            .and_then(Self::try_from)
    }
}

impl TryFrom<Number> for CartTotal {
    type Error = CartTotalError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        let non_negative = value
            .as_f64()
            .is_some_and(|total| total.is_finite() && total >= 0.0);
        if non_negative {
            Ok(Self(value))
        } else {
            Err(CartTotalError)
        }
    }
}

/// Request to price a cart with a coupon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponApplication {
    /// Coupon code to apply.
    pub code: String,
    /// Cart total before discount.
    pub cart_total: CartTotal,
    /// Products in the cart.
    #[serde(default)]
    pub product_ids: Vec<String>,
}

/// The remote's verdict on a coupon application, carried unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CouponDecision(Value);

impl CouponDecision {
    /// Wrap a remote decision body.
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// Whether the remote applied the coupon, when it says so.
    ///
    /// Reads the first boolean among `valid`, `success` and `applied`.
    pub fn applied(&self) -> Option<bool> {
        ["valid", "success", "applied"]
            .into_iter()
            .find_map(|key| self.0.get(key).and_then(Value::as_bool))
    }

    /// Discount granted, when the remote reports one as `discount` or
    /// `discountAmount`.
    pub fn discount(&self) -> Option<f64> {
        ["discount", "discountAmount"]
            .into_iter()
            .find_map(|key| self.0.get(key).and_then(Value::as_f64))
    }

    /// Raw decision body.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the decision, returning the raw body.
    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Remote acknowledgement of a deletion, carried unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CouponDeletion(Value);

impl CouponDeletion {
    /// Wrap a remote acknowledgement body.
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// Raw acknowledgement body; `Null` when the remote sent none.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the acknowledgement, returning the raw body.
    pub fn into_value(self) -> Value {
        self.0
    }
}
