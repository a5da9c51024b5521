//! In-memory order store for testing and development

use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use super::OrderStore;
use crate::core::error::{OrderError, StorageError};
use crate::core::{Order, OrderCriteria, OrderdeskResult, PageQuery, StatusCounts};

/// In-memory order store.
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
/// Records live in an [`IndexMap`] so iteration follows insertion order,
/// which is what makes the `order_date` tie-break deterministic: a stable
/// sort over the insertion-ordered snapshot leaves equal dates in the order
/// they were stored.
#[derive(Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<IndexMap<Uuid, Order>>>,
}

impl InMemoryOrderStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Snapshot of all records, in insertion order.
    fn snapshot(&self) -> OrderdeskResult<Vec<Order>> {
        let orders = self.orders.read().map_err(|e| StorageError::IntegrityError {
            message: format!("Failed to acquire read lock: {}", e),
        })?;
        Ok(orders.values().cloned().collect())
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable sort by order date, newest first. Input must be in insertion
/// order so ties keep it.
fn sort_by_order_date_desc(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
}

/// Cut one page out of the full sorted match set.
fn paginate(matches: Vec<Order>, page: &PageQuery) -> (Vec<Order>, usize) {
    let total = matches.len();
    let slice = matches
        .into_iter()
        .skip(page.offset())
        .take(page.limit())
        .collect();
    (slice, total)
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, order: Order) -> OrderdeskResult<Order> {
        let mut orders = self.orders.write().map_err(|e| StorageError::IntegrityError {
            message: format!("Failed to acquire write lock: {}", e),
        })?;

        if orders.values().any(|o| o.order_number == order.order_number) {
            return Err(OrderError::DuplicateNumber {
                order_number: order.order_number,
            }
            .into());
        }

        orders.insert(order.id, order.clone());

        Ok(order)
    }

    async fn get(&self, id: &Uuid) -> OrderdeskResult<Option<Order>> {
        let orders = self.orders.read().map_err(|e| StorageError::IntegrityError {
            message: format!("Failed to acquire read lock: {}", e),
        })?;

        Ok(orders.get(id).cloned())
    }

    async fn get_by_number(&self, order_number: &str) -> OrderdeskResult<Option<Order>> {
        let orders = self.orders.read().map_err(|e| StorageError::IntegrityError {
            message: format!("Failed to acquire read lock: {}", e),
        })?;

        Ok(orders
            .values()
            .find(|o| o.order_number == order_number)
            .cloned())
    }

    async fn update(&self, id: &Uuid, order: Order) -> OrderdeskResult<Order> {
        let mut orders = self.orders.write().map_err(|e| StorageError::IntegrityError {
            message: format!("Failed to acquire write lock: {}", e),
        })?;

        if !orders.contains_key(id) {
            return Err(OrderError::NotFound { id: *id }.into());
        }
        if orders
            .values()
            .any(|o| o.id != *id && o.order_number == order.order_number)
        {
            return Err(OrderError::DuplicateNumber {
                order_number: order.order_number,
            }
            .into());
        }

        // Inserting over an existing key keeps the record's insertion slot.
        orders.insert(*id, order.clone());

        Ok(order)
    }

    async fn delete(&self, id: &Uuid) -> OrderdeskResult<bool> {
        let mut orders = self.orders.write().map_err(|e| StorageError::IntegrityError {
            message: format!("Failed to acquire write lock: {}", e),
        })?;

        // shift_remove preserves insertion order for the survivors.
        Ok(orders.shift_remove(id).is_some())
    }

    async fn search(
        &self,
        criteria: &OrderCriteria,
        page: &PageQuery,
    ) -> OrderdeskResult<(Vec<Order>, usize)> {
        Ok(paginate(self.search_all(criteria).await?, page))
    }

    async fn search_all(&self, criteria: &OrderCriteria) -> OrderdeskResult<Vec<Order>> {
        let mut matches: Vec<Order> = self
            .snapshot()?
            .into_iter()
            .filter(|o| criteria.matches(o))
            .collect();
        sort_by_order_date_desc(&mut matches);
        Ok(matches)
    }

    async fn recent(&self, page: &PageQuery) -> OrderdeskResult<(Vec<Order>, usize)> {
        let mut orders = self.snapshot()?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(orders, page))
    }

    async fn count_by_status(&self) -> OrderdeskResult<StatusCounts> {
        let orders = self.orders.read().map_err(|e| StorageError::IntegrityError {
            message: format!("Failed to acquire read lock: {}", e),
        })?;

        Ok(StatusCounts::tally(orders.values()))
    }

    async fn count(&self) -> OrderdeskResult<usize> {
        let orders = self.orders.read().map_err(|e| StorageError::IntegrityError {
            message: format!("Failed to acquire read lock: {}", e),
        })?;

        Ok(orders.len())
    }
}
