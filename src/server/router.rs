//! Router builder for all HTTP routes

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{export, orders, AppState};

/// Build the full application router.
///
/// Order routes:
/// - GET  /api/orders - List orders, paginated, newest order date first
/// - POST /api/orders - Create an order
/// - GET  /api/orders/search - Filtered search, paginated
/// - GET  /api/orders/recent - Most recently created orders, paginated
/// - GET  /api/orders/statistics - Per-status counts
/// - GET  /api/orders/export - Full filtered set, unpaginated
/// - GET  /api/orders/number/{order_number} - Lookup by order number
/// - GET  /api/orders/customer?customerName= - Orders for one customer
/// - GET  /api/orders/status/{status} - Orders in one status
/// - GET/PUT/DELETE /api/orders/{id} - Single-order operations
///
/// Export routes:
/// - GET /api/export/excel - Two-sheet XLSX workbook of the filtered set
/// - GET /api/export/preview - First orders an export would contain
/// - GET /api/export/invoice/pdf/batch - One PDF for the filtered set
/// - GET /api/export/invoice/pdf/{order_id} - Single-order invoice PDF
pub fn build_router(state: AppState) -> Router {
    let order_routes = Router::new()
        .route(
            "/api/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route("/api/orders/search", get(orders::search_orders))
        .route("/api/orders/recent", get(orders::recent_orders))
        .route("/api/orders/statistics", get(orders::statistics))
        .route("/api/orders/export", get(orders::orders_for_export))
        .route(
            "/api/orders/number/{order_number}",
            get(orders::get_order_by_number),
        )
        .route("/api/orders/customer", get(orders::orders_by_customer))
        .route("/api/orders/status/{status}", get(orders::orders_by_status))
        .route(
            "/api/orders/{id}",
            get(orders::get_order)
                .put(orders::update_order)
                .delete(orders::delete_order),
        );

    let export_routes = Router::new()
        .route("/api/export/excel", get(export::export_excel))
        .route("/api/export/preview", get(export::export_preview))
        .route(
            "/api/export/invoice/pdf/batch",
            get(export::export_batch_invoices),
        )
        .route(
            "/api/export/invoice/pdf/{order_id}",
            get(export::export_invoice_pdf),
        );

    health_routes()
        .merge(order_routes)
        .merge(export_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Build health check routes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "orderdesk"
    }))
}
