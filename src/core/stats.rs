//! Order statistics
//!
//! [`StatusCounts`] is the raw per-status tally both storage backends
//! produce; [`OrderStatistics`] is the API-facing aggregate built from it.
//! Counting is exhaustive over every status, and the total is defined as the
//! sum of the six counts, so no status can silently fall out of the report.

use serde::Serialize;

use super::order::{Order, OrderStatus};

/// One counter per order status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: u64,
    pub confirmed: u64,
    pub processing: u64,
    pub shipped: u64,
    pub delivered: u64,
    pub cancelled: u64,
}

impl StatusCounts {
    /// Count one order of the given status.
    pub fn record(&mut self, status: OrderStatus) {
        match status {
            OrderStatus::Pending => self.pending += 1,
            OrderStatus::Confirmed => self.confirmed += 1,
            OrderStatus::Processing => self.processing += 1,
            OrderStatus::Shipped => self.shipped += 1,
            OrderStatus::Delivered => self.delivered += 1,
            OrderStatus::Cancelled => self.cancelled += 1,
        }
    }

    /// Add `n` orders of the given status (for GROUP BY results).
    pub fn record_n(&mut self, status: OrderStatus, n: u64) {
        match status {
            OrderStatus::Pending => self.pending += n,
            OrderStatus::Confirmed => self.confirmed += n,
            OrderStatus::Processing => self.processing += n,
            OrderStatus::Shipped => self.shipped += n,
            OrderStatus::Delivered => self.delivered += n,
            OrderStatus::Cancelled => self.cancelled += n,
        }
    }

    pub fn get(&self, status: OrderStatus) -> u64 {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Confirmed => self.confirmed,
            OrderStatus::Processing => self.processing,
            OrderStatus::Shipped => self.shipped,
            OrderStatus::Delivered => self.delivered,
            OrderStatus::Cancelled => self.cancelled,
        }
    }

    /// Sum of all six counters.
    pub fn total(&self) -> u64 {
        OrderStatus::ALL.iter().map(|s| self.get(*s)).sum()
    }

    /// Tally a set of orders.
    pub fn tally<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let mut counts = Self::default();
        for order in orders {
            counts.record(order.status);
        }
        counts
    }
}

/// The `/api/orders/statistics` payload.
///
/// All six statuses are reported; `total_orders` is their sum by
/// construction.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatistics {
    pub total_orders: u64,
    pub pending_orders: u64,
    pub confirmed_orders: u64,
    pub processing_orders: u64,
    pub shipped_orders: u64,
    pub delivered_orders: u64,
    pub cancelled_orders: u64,
}

impl From<StatusCounts> for OrderStatistics {
    fn from(counts: StatusCounts) -> Self {
        Self {
            total_orders: counts.total(),
            pending_orders: counts.pending,
            confirmed_orders: counts.confirmed,
            processing_orders: counts.processing,
            shipped_orders: counts.shipped,
            delivered_orders: counts.delivered,
            cancelled_orders: counts.cancelled,
        }
    }
}
