//! Storage implementations for the order store
//!
//! [`OrderStore`] is the persistence seam: the service layer only ever sees
//! `Arc<dyn OrderStore>`. The in-memory backend is the default; the sqlx
//! PostgreSQL backend compiles behind the `postgres` feature.

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::{Order, OrderCriteria, OrderdeskResult, PageQuery, StatusCounts};

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryOrderStore;
#[cfg(feature = "postgres")]
pub use postgres::{ensure_schema, PostgresOrderStore};

/// Persistence contract for order records.
///
/// Implementations enforce order-number uniqueness (create and update) and
/// produce search results ordered by `order_date` descending with ties in
/// insertion order, so pagination is stable across calls.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert a new record. Fails with the duplicate-number error when the
    /// order number is already taken.
    async fn create(&self, order: Order) -> OrderdeskResult<Order>;

    /// Get a record by id
    async fn get(&self, id: &Uuid) -> OrderdeskResult<Option<Order>>;

    /// Get a record by its unique order number
    async fn get_by_number(&self, order_number: &str) -> OrderdeskResult<Option<Order>>;

    /// Replace the record with this id. Fails with not-found when absent and
    /// with the duplicate-number error when the replacement takes another
    /// record's order number.
    async fn update(&self, id: &Uuid, order: Order) -> OrderdeskResult<Order>;

    /// Delete a record. Returns whether a record existed.
    async fn delete(&self, id: &Uuid) -> OrderdeskResult<bool>;

    /// One page of the records matching `criteria`, plus the total match
    /// count. Ordered by `order_date` descending, insertion order on ties.
    async fn search(
        &self,
        criteria: &OrderCriteria,
        page: &PageQuery,
    ) -> OrderdeskResult<(Vec<Order>, usize)>;

    /// All records matching `criteria`, unpaginated, same ordering as
    /// [`OrderStore::search`]. Feeds the export renderers.
    async fn search_all(&self, criteria: &OrderCriteria) -> OrderdeskResult<Vec<Order>>;

    /// One page of all records ordered by `created_at` descending (most
    /// recently created first).
    async fn recent(&self, page: &PageQuery) -> OrderdeskResult<(Vec<Order>, usize)>;

    /// Per-status record counts over the whole store
    async fn count_by_status(&self) -> OrderdeskResult<StatusCounts>;

    /// Total number of records
    async fn count(&self) -> OrderdeskResult<usize>;
}
