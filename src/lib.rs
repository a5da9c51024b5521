//! # Orderdesk
//!
//! An order record backend: CRUD and filtered search over order records,
//! per-status statistics, and in-memory export rendering (two-sheet XLSX
//! workbooks, single and batch PDF invoices), exposed over REST.
//!
//! ## Features
//!
//! - **Order CRUD**: Create, read, update, delete with unique order numbers
//! - **Filtered Search**: Five independent criteria combined by AND, paginated
//! - **Statistics**: Exhaustive per-status counts over the whole store
//! - **XLSX Export**: Two-sheet workbook (detail rows + statistics summary)
//! - **PDF Invoices**: Single-order invoice and paginated batch document
//! - **Pluggable Storage**: In-memory store by default, Postgres behind the
//!   `postgres` feature, same contract and filter semantics in both
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use orderdesk::prelude::*;
//!
//! let store = Arc::new(InMemoryOrderStore::new());
//! let service = OrderService::new(store);
//!
//! let draft = OrderDraft::new(
//!     "ORD-2024-001",
//!     "Zhang San",
//!     Decimal::new(29999, 2),
//!     OrderStatus::Pending,
//! );
//! let order = service.create_order(draft).await?;
//!
//! let app = build_router(AppState::new(service));
//! let listener = TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod export;
pub mod seed;
pub mod server;
pub mod service;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        Order, OrderCriteria, OrderDraft, OrderStatistics, OrderStatus, OrderdeskError,
        OrderdeskResult, PageQuery, PaginatedResponse, PaginationMeta, StatusCounts,
    };

    // === Service ===
    pub use crate::service::OrderService;

    // === Storage ===
    pub use crate::storage::{InMemoryOrderStore, OrderStore};
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresOrderStore;

    // === Export ===
    pub use crate::export::{render_batch_invoices, render_invoice, render_spreadsheet};

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{build_router, AppState};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;

    // === Axum ===
    pub use axum::{
        Router,
        extract::{Path, Query, State},
        routing::{delete, get, post, put},
    };
}
