//! Order domain model
//!
//! The [`Order`] record is the single entity this service manages. Identity is
//! two-fold: a surrogate [`Uuid`] assigned at creation, and a business-level
//! order number that is unique across the store. Mutation is whole-record
//! replacement only; the audit timestamps are maintained here, not by callers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::error::{FieldValidationError, ValidationError};

/// Lifecycle states of an order.
///
/// There are no transition rules; any status can be written at any time.
/// The wire form is the SCREAMING_SNAKE string (`"PENDING"`, ...), and
/// [`FromStr`]/[`fmt::Display`] round-trip the same strings for path
/// parameters and database columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in display order.
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// The canonical wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(OrderStatus::Pending),
            "CONFIRMED" => Ok(OrderStatus::Confirmed),
            "PROCESSING" => Ok(OrderStatus::Processing),
            "SHIPPED" => Ok(OrderStatus::Shipped),
            "DELIVERED" => Ok(OrderStatus::Delivered),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            other => Err(ValidationError::InvalidStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// A stored order record.
///
/// JSON uses camelCase field names (`orderNumber`, `totalAmount`, ...), the
/// shape existing API clients consume. `total_amount` is fixed-point
/// ([`Decimal`]) and serializes as a string so no precision is lost on the
/// wire; deserialization accepts both strings and plain numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Surrogate identity, assigned once at creation.
    pub id: Uuid,
    /// Business identity, unique across the store.
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    /// Non-negative, fixed-point.
    pub total_amount: Decimal,
    pub status: OrderStatus,
    /// Business-meaningful timestamp; may be backdated.
    pub order_date: DateTime<Utc>,
    pub description: Option<String>,
    pub product_details: Option<String>,
    /// Set once at creation, never touched afterwards.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful mutation. Always >= `created_at`.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Materialize a validated draft into a new record.
    ///
    /// Assigns a fresh v4 id, stamps both audit timestamps with `now`, and
    /// defaults `order_date` to `now` when the draft leaves it unset.
    pub fn from_draft(draft: OrderDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_number: draft.order_number,
            customer_name: draft.customer_name,
            customer_email: draft.customer_email,
            customer_phone: draft.customer_phone,
            total_amount: draft.total_amount,
            status: draft.status,
            order_date: draft.order_date.unwrap_or(now),
            description: draft.description,
            product_details: draft.product_details,
            created_at: now,
            updated_at: now,
        }
    }

    /// Build the whole-record replacement for this record.
    ///
    /// Every draft field overwrites the stored one. `id` and `created_at`
    /// survive, `updated_at` becomes `now`, and a draft without an
    /// `order_date` keeps the stored date.
    pub fn replaced_with(&self, draft: OrderDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id,
            order_number: draft.order_number,
            customer_name: draft.customer_name,
            customer_email: draft.customer_email,
            customer_phone: draft.customer_phone,
            total_amount: draft.total_amount,
            status: draft.status,
            order_date: draft.order_date.unwrap_or(self.order_date),
            description: draft.description,
            product_details: draft.product_details,
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

/// The create/update payload: every [`Order`] field a client may set.
///
/// `id`, `created_at` and `updated_at` are never client-controlled. Updates
/// submit a full replacement draft, not a patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub order_number: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    /// Unset means "now" on create and "keep the stored date" on update.
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product_details: Option<String>,
}

impl OrderDraft {
    /// Minimal draft with the required fields; optionals start unset.
    pub fn new(
        order_number: impl Into<String>,
        customer_name: impl Into<String>,
        total_amount: Decimal,
        status: OrderStatus,
    ) -> Self {
        Self {
            order_number: order_number.into(),
            customer_name: customer_name.into(),
            customer_email: None,
            customer_phone: None,
            total_amount,
            status,
            order_date: None,
            description: None,
            product_details: None,
        }
    }

    /// Validate the draft, collecting every offending field.
    ///
    /// Returns `ValidationError::FieldErrors` listing all failures rather
    /// than stopping at the first, so a client can fix a form in one pass.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if self.order_number.trim().is_empty() {
            errors.push(FieldValidationError {
                field: "orderNumber".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.customer_name.trim().is_empty() {
            errors.push(FieldValidationError {
                field: "customerName".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.total_amount.is_sign_negative() {
            errors.push(FieldValidationError {
                field: "totalAmount".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if let Some(email) = &self.customer_email {
            // Full address validation is the mail system's job; reject only
            // values that cannot possibly be addresses.
            if !email.trim().is_empty() && !email.contains('@') {
                errors.push(FieldValidationError {
                    field: "customerEmail".to_string(),
                    message: "is not a valid email address".to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::FieldErrors(errors))
        }
    }
}
