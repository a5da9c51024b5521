//! Search criteria for order queries
//!
//! [`OrderCriteria`] holds five independent optional criteria that combine by
//! conjunction: an unset criterion never filters, a set one always does. The
//! same struct drives both backends — the in-memory store evaluates
//! [`OrderCriteria::matches`] directly, the SQL backend composes an
//! equivalent `WHERE` clause — so filter semantics cannot drift between them.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::order::{Order, OrderStatus};

/// Filter criteria for order searches. All fields optional, combined by AND.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderCriteria {
    /// Case-sensitive infix match on the order number.
    pub order_number: Option<String>,
    /// Case-insensitive infix match on the customer name.
    pub customer_name: Option<String>,
    /// Exact status match.
    pub status: Option<OrderStatus>,
    /// Inclusive lower bound on the order date.
    #[serde(deserialize_with = "deserialize_opt_datetime")]
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the order date.
    #[serde(deserialize_with = "deserialize_opt_datetime")]
    pub end_date: Option<DateTime<Utc>>,
}

impl OrderCriteria {
    /// Criteria that match every order.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order_number(mut self, needle: impl Into<String>) -> Self {
        self.order_number = Some(needle.into());
        self
    }

    pub fn with_customer_name(mut self, needle: impl Into<String>) -> Self {
        self.customer_name = Some(needle.into());
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn not_before(mut self, start: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn not_after(mut self, end: DateTime<Utc>) -> Self {
        self.end_date = Some(end);
        self
    }

    /// True when no criterion is set, i.e. the criteria match everything.
    pub fn is_empty(&self) -> bool {
        self.order_number.is_none()
            && self.customer_name.is_none()
            && self.status.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Evaluate the conjunction of all set criteria against one order.
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(needle) = &self.order_number {
            if !order.order_number.contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(needle) = &self.customer_name {
            let haystack = order.customer_name.to_lowercase();
            if !haystack.contains(&needle.to_lowercase()) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if order.order_date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if order.order_date > end {
                return false;
            }
        }
        true
    }
}

/// Accept both RFC 3339 (`2024-01-01T00:00:00Z`) and the bare local-datetime
/// form existing clients send (`2024-01-01T00:00:00`, with optional fraction),
/// the latter interpreted as UTC.
fn deserialize_opt_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_datetime(&s).map(Some).map_err(serde::de::Error::custom),
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(format!("invalid datetime: '{}'", s))
}
