//! Macro-generated test suite for `OrderStore` contract validation.
//!
//! The `order_store_tests!` macro generates a test module that validates any
//! `OrderStore` implementation against the full contract: CRUD with
//! order-number uniqueness, filtered search with its ordering and pagination
//! guarantees, recency and statistics queries, and concurrent access.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod order_harness;
//!
//! use order_harness::*;
//! use orderdesk::storage::InMemoryOrderStore;
//!
//! order_store_tests!(InMemoryOrderStore::new());
//! ```
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_create_and_get` — create then retrieve, verify every field
//! - `test_create_duplicate_number` — second create with a taken number is rejected
//! - `test_get_nonexistent` — get with a random UUID returns None
//! - `test_get_by_number` — lookup by business key among several records
//! - `test_get_by_number_missing` — unknown number returns None
//! - `test_update_existing` — whole-record replacement, audit fields verified
//! - `test_update_nonexistent` — update of an unknown id is the typed not-found
//! - `test_update_keeps_own_number` — a record may keep its number on update
//! - `test_update_rejects_taken_number` — stealing another record's number fails
//! - `test_delete_existing` — returns true, record gone afterwards
//! - `test_delete_nonexistent` — returns false, no error
//!
//! ## Search
//! - `test_search_empty_criteria_returns_all`
//! - `test_search_by_order_number_fragment` — case-sensitive infix
//! - `test_search_by_customer_name` — case-insensitive infix
//! - `test_search_by_status` — exact match
//! - `test_search_date_range_inclusive` — both bounds inclusive
//! - `test_search_combines_criteria` — conjunction of all set criteria
//! - `test_search_ordering_newest_first` — date descending, ties keep insertion order
//! - `test_search_pagination_slices` — page 2 holds the right records
//! - `test_search_page_beyond_end` — empty page, total still reported
//! - `test_search_all_returns_everything` — unpaginated, same ordering
//!
//! ## Recency & counts
//! - `test_recent_follows_created_at` — recency ignores the business date
//! - `test_count_by_status` — exhaustive per-status tally
//! - `test_count` — total record count
//!
//! ## Edge cases
//! - `test_concurrent_creates` — parallel creates from spawned tasks

/// Generate a full `OrderStore` conformance test suite.
///
/// `$factory` must be an expression that evaluates to an instance
/// implementing `OrderStore + Clone`. It is re-evaluated for each test to
/// ensure isolation; for the concurrency test the clones must share the
/// backing store (the Arc / pool pattern both backends use).
#[macro_export]
macro_rules! order_store_tests {
    ($factory:expr) => {
        mod order_store_contract_tests {
            use super::*;
            use chrono::{DateTime, TimeZone, Utc};
            use orderdesk::core::error::{OrderError, OrderdeskError};
            use orderdesk::core::{OrderCriteria, OrderStatus, PageQuery};
            use orderdesk::storage::OrderStore;
            use uuid::Uuid;

            /// Noon UTC on a March 2024 day. Whole seconds, so the instant
            /// survives a SQL timestamp round-trip exactly.
            fn day(d: u32) -> DateTime<Utc> {
                Utc.with_ymd_and_hms(2024, 3, d, 12, 0, 0).unwrap()
            }

            // ==================================================================
            // CRUD — Create & Get
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_get() {
                let store = $factory;
                let order = order_with_dates("ORD-2024-100", day(15), day(16));
                let id = order.id;

                let created = store.create(order).await.unwrap();
                assert_eq!(created.id, id);
                assert_eq!(created.order_number, "ORD-2024-100");

                let retrieved = store.get(&id).await.unwrap();
                assert!(retrieved.is_some(), "Order should exist after create");
                let retrieved = retrieved.unwrap();
                assert_eq!(retrieved.id, id);
                assert_eq!(retrieved.order_number, "ORD-2024-100");
                assert_eq!(retrieved.customer_name, "Zhang San");
                assert_eq!(
                    retrieved.customer_email.as_deref(),
                    Some("zhangsan@email.com")
                );
                assert_eq!(retrieved.customer_phone.as_deref(), Some("13800138001"));
                assert_eq!(retrieved.total_amount, amount("299.99"));
                assert_eq!(retrieved.status, OrderStatus::Pending);
                assert_eq!(retrieved.order_date, day(15));
                assert_eq!(retrieved.description.as_deref(), Some("Electronics order"));
                assert_eq!(
                    retrieved.product_details.as_deref(),
                    Some("iPhone 15 Pro Max - 256GB")
                );
                assert_eq!(retrieved.created_at, day(16));
                assert_eq!(retrieved.updated_at, day(16));
            }

            // ==================================================================
            // CRUD — Duplicate order number
            // ==================================================================

            #[tokio::test]
            async fn test_create_duplicate_number() {
                let store = $factory;
                store.create(sample_order("ORD-DUP")).await.unwrap();

                let err = store.create(sample_order("ORD-DUP")).await.unwrap_err();
                match err {
                    OrderdeskError::Order(OrderError::DuplicateNumber { order_number }) => {
                        assert_eq!(order_number, "ORD-DUP");
                    }
                    other => panic!("Expected DuplicateNumber, got {:?}", other),
                }

                assert_eq!(
                    store.count().await.unwrap(),
                    1,
                    "Rejected create must not insert a record"
                );
            }

            // ==================================================================
            // CRUD — Get nonexistent
            // ==================================================================

            #[tokio::test]
            async fn test_get_nonexistent() {
                let store = $factory;
                let result = store.get(&Uuid::new_v4()).await.unwrap();
                assert!(
                    result.is_none(),
                    "Getting a nonexistent order should return None"
                );
            }

            // ==================================================================
            // CRUD — Get by order number
            // ==================================================================

            #[tokio::test]
            async fn test_get_by_number() {
                let store = $factory;
                store.create(sample_order("ORD-A")).await.unwrap();
                store.create(sample_order("ORD-B")).await.unwrap();

                let found = store.get_by_number("ORD-B").await.unwrap();
                assert!(found.is_some(), "Order ORD-B should be found by number");
                assert_eq!(found.unwrap().order_number, "ORD-B");
            }

            #[tokio::test]
            async fn test_get_by_number_missing() {
                let store = $factory;
                store.create(sample_order("ORD-A")).await.unwrap();

                let result = store.get_by_number("ORD-MISSING").await.unwrap();
                assert!(result.is_none());
            }

            // ==================================================================
            // CRUD — Update existing
            // ==================================================================

            #[tokio::test]
            async fn test_update_existing() {
                let store = $factory;
                let original = order_with_dates("ORD-1", day(10), day(10));
                let id = original.id;
                store.create(original.clone()).await.unwrap();

                let draft = draft_with("ORD-1-REV", "Li Si", "549.50", OrderStatus::Shipped);
                let replacement = original.replaced_with(draft, day(12));

                let updated = store.update(&id, replacement).await.unwrap();
                assert_eq!(updated.order_number, "ORD-1-REV");
                assert_eq!(updated.customer_name, "Li Si");
                assert_eq!(updated.status, OrderStatus::Shipped);

                let retrieved = store.get(&id).await.unwrap().unwrap();
                assert_eq!(retrieved.order_number, "ORD-1-REV");
                assert_eq!(retrieved.total_amount, amount("549.50"));
                // Whole-record replacement: the omitted optionals are gone.
                assert_eq!(retrieved.description, None);
                assert_eq!(retrieved.created_at, day(10));
                assert_eq!(retrieved.updated_at, day(12));
                // The replacement draft had no order date: the stored one survives.
                assert_eq!(retrieved.order_date, day(10));
            }

            // ==================================================================
            // CRUD — Update nonexistent
            // ==================================================================

            #[tokio::test]
            async fn test_update_nonexistent() {
                let store = $factory;
                let ghost = sample_order("ORD-GHOST");
                let id = ghost.id;

                let err = store.update(&id, ghost).await.unwrap_err();
                assert!(
                    matches!(err, OrderdeskError::Order(OrderError::NotFound { .. })),
                    "Expected NotFound, got {:?}",
                    err
                );
            }

            // ==================================================================
            // CRUD — Update and order-number uniqueness
            // ==================================================================

            #[tokio::test]
            async fn test_update_keeps_own_number() {
                let store = $factory;
                let order = sample_order("ORD-KEEP");
                let id = order.id;
                store.create(order.clone()).await.unwrap();

                // Re-submitting the record's own number must not conflict.
                let draft = draft_with("ORD-KEEP", "Wang Wu", "10.00", OrderStatus::Confirmed);
                let replacement = order.replaced_with(draft, Utc::now());
                store.update(&id, replacement).await.unwrap();

                let retrieved = store.get(&id).await.unwrap().unwrap();
                assert_eq!(retrieved.customer_name, "Wang Wu");
                assert_eq!(retrieved.status, OrderStatus::Confirmed);
            }

            #[tokio::test]
            async fn test_update_rejects_taken_number() {
                let store = $factory;
                store.create(sample_order("ORD-A")).await.unwrap();
                let b = sample_order("ORD-B");
                let b_id = b.id;
                store.create(b.clone()).await.unwrap();

                let draft = draft_with("ORD-A", "Li Si", "20.00", OrderStatus::Pending);
                let replacement = b.replaced_with(draft, Utc::now());
                let err = store.update(&b_id, replacement).await.unwrap_err();
                match err {
                    OrderdeskError::Order(OrderError::DuplicateNumber { order_number }) => {
                        assert_eq!(order_number, "ORD-A");
                    }
                    other => panic!("Expected DuplicateNumber, got {:?}", other),
                }

                // The rejected update must leave the record untouched.
                let untouched = store.get(&b_id).await.unwrap().unwrap();
                assert_eq!(untouched.order_number, "ORD-B");
            }

            // ==================================================================
            // CRUD — Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let store = $factory;
                let order = sample_order("ORD-GONE");
                let id = order.id;
                store.create(order).await.unwrap();

                let deleted = store.delete(&id).await.unwrap();
                assert!(deleted, "Delete of an existing order should report true");
                assert!(
                    store.get(&id).await.unwrap().is_none(),
                    "Order should be gone after delete"
                );
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let store = $factory;
                let deleted = store.delete(&Uuid::new_v4()).await.unwrap();
                assert!(!deleted, "Delete of an unknown id should report false");
            }

            // ==================================================================
            // Search — Empty criteria
            // ==================================================================

            #[tokio::test]
            async fn test_search_empty_criteria_returns_all() {
                let store = $factory;
                for order in sample_batch(4) {
                    store.create(order).await.unwrap();
                }

                let (orders, total) = store
                    .search(&OrderCriteria::new(), &PageQuery::default())
                    .await
                    .unwrap();
                assert_eq!(total, 4);
                assert_eq!(orders.len(), 4);
            }

            // ==================================================================
            // Search — Order number fragment (case-sensitive)
            // ==================================================================

            #[tokio::test]
            async fn test_search_by_order_number_fragment() {
                let store = $factory;
                for order in sample_batch(3) {
                    store.create(order).await.unwrap();
                }

                let criteria = OrderCriteria::new().with_order_number("2024-002");
                let (orders, total) = store
                    .search(&criteria, &PageQuery::default())
                    .await
                    .unwrap();
                assert_eq!(total, 1);
                assert_eq!(orders[0].order_number, "ORD-2024-002");

                // The match is case-sensitive.
                let criteria = OrderCriteria::new().with_order_number("ord-2024");
                let (_, total) = store
                    .search(&criteria, &PageQuery::default())
                    .await
                    .unwrap();
                assert_eq!(total, 0);
            }

            // ==================================================================
            // Search — Customer name (case-insensitive)
            // ==================================================================

            #[tokio::test]
            async fn test_search_by_customer_name() {
                let store = $factory;
                store
                    .create(order_for("ORD-1", "Zhang San", OrderStatus::Pending))
                    .await
                    .unwrap();
                store
                    .create(order_for("ORD-2", "Li Si", OrderStatus::Pending))
                    .await
                    .unwrap();
                store
                    .create(order_for("ORD-3", "ZHANG Wei", OrderStatus::Pending))
                    .await
                    .unwrap();

                let criteria = OrderCriteria::new().with_customer_name("zhang");
                let (orders, total) = store
                    .search(&criteria, &PageQuery::default())
                    .await
                    .unwrap();
                assert_eq!(total, 2, "Case-insensitive match should find both Zhangs");
                assert!(orders
                    .iter()
                    .all(|o| o.customer_name.to_lowercase().contains("zhang")));
            }

            // ==================================================================
            // Search — Status
            // ==================================================================

            #[tokio::test]
            async fn test_search_by_status() {
                let store = $factory;
                store
                    .create(order_for("ORD-1", "Zhang San", OrderStatus::Shipped))
                    .await
                    .unwrap();
                store
                    .create(order_for("ORD-2", "Li Si", OrderStatus::Delivered))
                    .await
                    .unwrap();
                store
                    .create(order_for("ORD-3", "Wang Wu", OrderStatus::Shipped))
                    .await
                    .unwrap();

                let criteria = OrderCriteria::new().with_status(OrderStatus::Shipped);
                let (orders, total) = store
                    .search(&criteria, &PageQuery::default())
                    .await
                    .unwrap();
                assert_eq!(total, 2);
                assert!(orders.iter().all(|o| o.status == OrderStatus::Shipped));
            }

            // ==================================================================
            // Search — Date range (inclusive bounds)
            // ==================================================================

            #[tokio::test]
            async fn test_search_date_range_inclusive() {
                let store = $factory;
                for (number, d) in [("ORD-1", 10), ("ORD-2", 15), ("ORD-3", 20)] {
                    store
                        .create(order_with_dates(number, day(d), Utc::now()))
                        .await
                        .unwrap();
                }

                let criteria = OrderCriteria::new().not_before(day(10)).not_after(day(20));
                let (_, total) = store
                    .search(&criteria, &PageQuery::default())
                    .await
                    .unwrap();
                assert_eq!(total, 3, "Both bounds are inclusive");

                let criteria = OrderCriteria::new().not_before(day(11)).not_after(day(19));
                let (orders, total) = store
                    .search(&criteria, &PageQuery::default())
                    .await
                    .unwrap();
                assert_eq!(total, 1);
                assert_eq!(orders[0].order_number, "ORD-2");

                // A degenerate range still matches the order on the boundary.
                let criteria = OrderCriteria::new().not_before(day(15)).not_after(day(15));
                let (orders, _) = store
                    .search(&criteria, &PageQuery::default())
                    .await
                    .unwrap();
                assert_numbers(&orders, &["ORD-2"]);
            }

            // ==================================================================
            // Search — Conjunction of criteria
            // ==================================================================

            #[tokio::test]
            async fn test_search_combines_criteria() {
                let store = $factory;
                store
                    .create(order_for("ORD-1", "Zhang San", OrderStatus::Shipped))
                    .await
                    .unwrap();
                store
                    .create(order_for("ORD-2", "Zhang San", OrderStatus::Pending))
                    .await
                    .unwrap();
                store
                    .create(order_for("ORD-3", "Li Si", OrderStatus::Shipped))
                    .await
                    .unwrap();

                let criteria = OrderCriteria::new()
                    .with_customer_name("zhang")
                    .with_status(OrderStatus::Shipped);
                let (orders, total) = store
                    .search(&criteria, &PageQuery::default())
                    .await
                    .unwrap();
                assert_eq!(total, 1, "Only the record matching every criterion");
                assert_eq!(orders[0].order_number, "ORD-1");
            }

            // ==================================================================
            // Search — Ordering (date descending, stable ties)
            // ==================================================================

            #[tokio::test]
            async fn test_search_ordering_newest_first() {
                let store = $factory;
                // Two records share a date; insertion order breaks the tie.
                for (number, d) in [
                    ("ORD-MID-A", 14),
                    ("ORD-OLD", 3),
                    ("ORD-MID-B", 14),
                    ("ORD-NEW", 28),
                ] {
                    store
                        .create(order_with_dates(number, day(d), Utc::now()))
                        .await
                        .unwrap();
                }

                let (orders, total) = store
                    .search(&OrderCriteria::new(), &PageQuery::default())
                    .await
                    .unwrap();
                assert_eq!(total, 4);
                assert_numbers(&orders, &["ORD-NEW", "ORD-MID-A", "ORD-MID-B", "ORD-OLD"]);
            }

            // ==================================================================
            // Search — Pagination
            // ==================================================================

            #[tokio::test]
            async fn test_search_pagination_slices() {
                let store = $factory;
                for order in sample_batch(5) {
                    store.create(order).await.unwrap();
                }

                // Newest first: 001 is the newest, so page 2 holds 003 and 004.
                let (orders, total) = store
                    .search(&OrderCriteria::new(), &PageQuery::new(2, 2))
                    .await
                    .unwrap();
                assert_eq!(total, 5);
                assert_numbers(&orders, &["ORD-2024-003", "ORD-2024-004"]);
            }

            #[tokio::test]
            async fn test_search_page_beyond_end() {
                let store = $factory;
                for order in sample_batch(5) {
                    store.create(order).await.unwrap();
                }

                let (orders, total) = store
                    .search(&OrderCriteria::new(), &PageQuery::new(99, 2))
                    .await
                    .unwrap();
                assert!(orders.is_empty(), "Page past the end should be empty");
                assert_eq!(total, 5, "Total still reports the full match count");
            }

            // ==================================================================
            // Search — Unpaginated export set
            // ==================================================================

            #[tokio::test]
            async fn test_search_all_returns_everything() {
                let store = $factory;
                for order in sample_batch(7) {
                    store.create(order).await.unwrap();
                }

                let all = store.search_all(&OrderCriteria::new()).await.unwrap();
                assert_eq!(all.len(), 7);
                assert_date_desc(&all);

                // Criteria still apply; batch statuses cycle, so exactly one
                // of the seven is Shipped.
                let shipped = store
                    .search_all(&OrderCriteria::new().with_status(OrderStatus::Shipped))
                    .await
                    .unwrap();
                assert_eq!(shipped.len(), 1);
                assert_eq!(shipped[0].status, OrderStatus::Shipped);
            }

            // ==================================================================
            // Recency — created_at, not the business date
            // ==================================================================

            #[tokio::test]
            async fn test_recent_follows_created_at() {
                let store = $factory;
                // Dated late but created early, and the other way around.
                store
                    .create(order_with_dates("ORD-FRESH-DATE", day(28), day(1)))
                    .await
                    .unwrap();
                store
                    .create(order_with_dates("ORD-FRESH-ROW", day(2), day(27)))
                    .await
                    .unwrap();

                let (recent, total) = store.recent(&PageQuery::default()).await.unwrap();
                assert_eq!(total, 2);
                assert_numbers(&recent, &["ORD-FRESH-ROW", "ORD-FRESH-DATE"]);

                // Search order is the reverse: it follows the business date.
                let (searched, _) = store
                    .search(&OrderCriteria::new(), &PageQuery::default())
                    .await
                    .unwrap();
                assert_numbers(&searched, &["ORD-FRESH-DATE", "ORD-FRESH-ROW"]);
            }

            // ==================================================================
            // Counts
            // ==================================================================

            #[tokio::test]
            async fn test_count_by_status() {
                let store = $factory;
                let statuses = [
                    OrderStatus::Pending,
                    OrderStatus::Pending,
                    OrderStatus::Shipped,
                    OrderStatus::Delivered,
                    OrderStatus::Delivered,
                    OrderStatus::Delivered,
                ];
                for (i, status) in statuses.iter().enumerate() {
                    store
                        .create(order_for(&format!("ORD-{}", i), "Zhang San", *status))
                        .await
                        .unwrap();
                }

                let counts = store.count_by_status().await.unwrap();
                assert_eq!(counts.pending, 2);
                assert_eq!(counts.confirmed, 0);
                assert_eq!(counts.processing, 0);
                assert_eq!(counts.shipped, 1);
                assert_eq!(counts.delivered, 3);
                assert_eq!(counts.cancelled, 0);
                assert_eq!(counts.total(), 6);
            }

            #[tokio::test]
            async fn test_count() {
                let store = $factory;
                assert_eq!(store.count().await.unwrap(), 0);

                for order in sample_batch(3) {
                    store.create(order).await.unwrap();
                }
                assert_eq!(store.count().await.unwrap(), 3);
            }

            // ==================================================================
            // Edge case — Concurrent creates
            // ==================================================================

            /// Concurrent creates from spawned tasks must both land.
            ///
            /// Requires the store to be `Clone + Send + 'static`, with clones
            /// sharing the backing state (Arc for in-memory, pool for SQL).
            #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
            async fn test_concurrent_creates() {
                let store = $factory;
                let s1 = store.clone();
                let s2 = store.clone();

                let a = sample_order("ORD-CONC-A");
                let b = sample_order("ORD-CONC-B");
                let a_id = a.id;
                let b_id = b.id;

                let h1 = tokio::spawn(async move { s1.create(a).await });
                let h2 = tokio::spawn(async move { s2.create(b).await });

                let (r1, r2) = tokio::time::timeout(std::time::Duration::from_secs(30), async {
                    tokio::try_join!(h1, h2).unwrap()
                })
                .await
                .expect("Concurrent creates timed out after 30s — possible deadlock");

                r1.unwrap();
                r2.unwrap();

                assert_eq!(
                    store.count().await.unwrap(),
                    2,
                    "Both concurrently created orders should be present"
                );
                assert!(
                    store.get(&a_id).await.unwrap().is_some(),
                    "Order A should be present"
                );
                assert!(
                    store.get(&b_id).await.unwrap().is_some(),
                    "Order B should be present"
                );
            }
        }
    };
}
