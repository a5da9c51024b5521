//! Order use-case facade
//!
//! [`OrderService`] sits between the HTTP handlers and the [`OrderStore`]:
//! it validates drafts, owns the audit timestamps, translates "absent" into
//! typed not-found errors, and assembles pagination envelopes and
//! statistics. Handlers never talk to a store directly.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::OrderError;
use crate::core::{
    Order, OrderCriteria, OrderDraft, OrderStatistics, OrderdeskResult, PageQuery,
    PaginatedResponse,
};
use crate::storage::OrderStore;

/// How many orders an export preview shows.
pub const PREVIEW_LIMIT: usize = 10;

/// Application service for order operations.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Validate a draft and persist it as a new order.
    pub async fn create_order(&self, draft: OrderDraft) -> OrderdeskResult<Order> {
        draft.validate()?;
        let order = Order::from_draft(draft, Utc::now());
        let created = self.store.create(order).await?;
        tracing::info!(
            order_id = %created.id,
            order_number = %created.order_number,
            "Order created"
        );
        Ok(created)
    }

    /// Get one order by id, or the typed not-found error.
    pub async fn get_order(&self, id: &Uuid) -> OrderdeskResult<Order> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound { id: *id }.into())
    }

    /// Get one order by its unique order number, or the typed not-found
    /// error.
    pub async fn get_order_by_number(&self, order_number: &str) -> OrderdeskResult<Order> {
        self.store
            .get_by_number(order_number)
            .await?
            .ok_or_else(|| {
                OrderError::NotFoundByNumber {
                    order_number: order_number.to_string(),
                }
                .into()
            })
    }

    /// Replace the order with this id by the draft (whole-record update).
    ///
    /// `id` and `created_at` survive from the stored record, `updated_at`
    /// is refreshed, and a draft without an `order_date` keeps the stored
    /// date.
    pub async fn update_order(&self, id: &Uuid, draft: OrderDraft) -> OrderdeskResult<Order> {
        draft.validate()?;
        let existing = self.get_order(id).await?;
        let replacement = existing.replaced_with(draft, Utc::now());
        let updated = self.store.update(id, replacement).await?;
        tracing::info!(order_id = %updated.id, "Order updated");
        Ok(updated)
    }

    /// Delete the order with this id, or the typed not-found error.
    pub async fn delete_order(&self, id: &Uuid) -> OrderdeskResult<()> {
        if self.store.delete(id).await? {
            tracing::info!(order_id = %id, "Order deleted");
            Ok(())
        } else {
            Err(OrderError::NotFound { id: *id }.into())
        }
    }

    /// One page of all orders, newest order date first.
    pub async fn list_orders(
        &self,
        page: &PageQuery,
    ) -> OrderdeskResult<PaginatedResponse<Order>> {
        self.search_orders(&OrderCriteria::new(), page).await
    }

    /// One page of the orders matching `criteria`.
    pub async fn search_orders(
        &self,
        criteria: &OrderCriteria,
        page: &PageQuery,
    ) -> OrderdeskResult<PaginatedResponse<Order>> {
        let (orders, total) = self.store.search(criteria, page).await?;
        tracing::debug!(total, page = page.page(), "Order search");
        Ok(PaginatedResponse::new(orders, page, total))
    }

    /// One page of all orders, most recently created first.
    pub async fn recent_orders(
        &self,
        page: &PageQuery,
    ) -> OrderdeskResult<PaginatedResponse<Order>> {
        let (orders, total) = self.store.recent(page).await?;
        Ok(PaginatedResponse::new(orders, page, total))
    }

    /// Per-status counts over the whole store; the total is their sum.
    pub async fn statistics(&self) -> OrderdeskResult<OrderStatistics> {
        let counts = self.store.count_by_status().await?;
        Ok(counts.into())
    }

    /// The full set of orders matching `criteria`, in export order
    /// (order date descending, insertion order on ties).
    pub async fn export_set(&self, criteria: &OrderCriteria) -> OrderdeskResult<Vec<Order>> {
        self.store.search_all(criteria).await
    }

    /// The first [`PREVIEW_LIMIT`] orders an export of `criteria` would
    /// contain.
    pub async fn preview(&self, criteria: &OrderCriteria) -> OrderdeskResult<Vec<Order>> {
        let mut orders = self.store.search_all(criteria).await?;
        orders.truncate(PREVIEW_LIMIT);
        Ok(orders)
    }

    /// Total number of stored orders.
    pub async fn count(&self) -> OrderdeskResult<usize> {
        self.store.count().await
    }
}
