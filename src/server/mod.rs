//! HTTP server module
//!
//! This module exposes the order service over REST:
//! - CRUD and query routes under `/api/orders`
//! - Export routes (XLSX, PDF invoices) under `/api/export`
//! - Health check routes at `/health` and `/healthz`

pub mod handlers;
pub mod router;

pub use handlers::AppState;
pub use router::build_router;
