//! HTTP handlers for order CRUD and query operations
//!
//! Handlers stay thin: extract, call [`OrderService`], wrap the result.
//! Domain errors convert to HTTP responses through the crate error type,
//! so every failure path produces the same JSON error shape.
//!
//! [`OrderService`]: crate::service::OrderService

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::error::ValidationError;
use crate::core::{
    Order, OrderCriteria, OrderDraft, OrderStatistics, OrderStatus, OrderdeskResult, PageQuery,
    PaginatedResponse,
};

use super::AppState;

/// Query parameters for the by-customer shortcut route.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerParams {
    pub customer_name: String,
}

/// List all orders, paginated
///
/// GET /api/orders?page=1&limit=20
pub async fn list_orders(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> OrderdeskResult<Json<PaginatedResponse<Order>>> {
    let orders = state.service.list_orders(&page).await?;
    Ok(Json(orders))
}

/// Search orders with filters, paginated
///
/// GET /api/orders/search?orderNumber=&customerName=&status=&startDate=&endDate=
pub async fn search_orders(
    State(state): State<AppState>,
    Query(criteria): Query<OrderCriteria>,
    Query(page): Query<PageQuery>,
) -> OrderdeskResult<Json<PaginatedResponse<Order>>> {
    let orders = state.service.search_orders(&criteria, &page).await?;
    Ok(Json(orders))
}

/// List orders by creation time, newest first
///
/// GET /api/orders/recent?page=1&limit=20
pub async fn recent_orders(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> OrderdeskResult<Json<PaginatedResponse<Order>>> {
    let orders = state.service.recent_orders(&page).await?;
    Ok(Json(orders))
}

/// Per-status order counts
///
/// GET /api/orders/statistics
pub async fn statistics(
    State(state): State<AppState>,
) -> OrderdeskResult<Json<OrderStatistics>> {
    let stats = state.service.statistics().await?;
    Ok(Json(stats))
}

/// Full filtered order set, unpaginated, in export order
///
/// GET /api/orders/export?orderNumber=&customerName=&status=&startDate=&endDate=
pub async fn orders_for_export(
    State(state): State<AppState>,
    Query(criteria): Query<OrderCriteria>,
) -> OrderdeskResult<Json<Vec<Order>>> {
    let orders = state.service.export_set(&criteria).await?;
    Ok(Json(orders))
}

/// Get one order by id
///
/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> OrderdeskResult<Json<Order>> {
    let order = state.service.get_order(&id).await?;
    Ok(Json(order))
}

/// Get one order by its unique order number
///
/// GET /api/orders/number/{order_number}
pub async fn get_order_by_number(
    State(state): State<AppState>,
    Path(order_number): Path<String>,
) -> OrderdeskResult<Json<Order>> {
    let order = state.service.get_order_by_number(&order_number).await?;
    Ok(Json(order))
}

/// List one customer's orders, paginated
///
/// GET /api/orders/customer?customerName=Zhang
pub async fn orders_by_customer(
    State(state): State<AppState>,
    Query(params): Query<CustomerParams>,
    Query(page): Query<PageQuery>,
) -> OrderdeskResult<Json<PaginatedResponse<Order>>> {
    let criteria = OrderCriteria::new().with_customer_name(params.customer_name);
    let orders = state.service.search_orders(&criteria, &page).await?;
    Ok(Json(orders))
}

/// List orders in one status, paginated
///
/// GET /api/orders/status/{status}
pub async fn orders_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
    Query(page): Query<PageQuery>,
) -> OrderdeskResult<Json<PaginatedResponse<Order>>> {
    let status: OrderStatus = status.parse()?;
    let criteria = OrderCriteria::new().with_status(status);
    let orders = state.service.search_orders(&criteria, &page).await?;
    Ok(Json(orders))
}

/// Create a new order
///
/// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    body: Result<Json<OrderDraft>, JsonRejection>,
) -> OrderdeskResult<Json<Order>> {
    let Json(draft) = body.map_err(invalid_json)?;
    let order = state.service.create_order(draft).await?;
    Ok(Json(order))
}

/// Replace an existing order
///
/// PUT /api/orders/{id}
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Result<Json<OrderDraft>, JsonRejection>,
) -> OrderdeskResult<Json<Order>> {
    let Json(draft) = body.map_err(invalid_json)?;
    let order = state.service.update_order(&id, draft).await?;
    Ok(Json(order))
}

/// Delete an order
///
/// DELETE /api/orders/{id}
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> OrderdeskResult<StatusCode> {
    state.service.delete_order(&id).await?;
    Ok(StatusCode::OK)
}

// Malformed or mistyped request bodies report through the shared error
// shape instead of the extractor's plain-text rejection.
fn invalid_json(rejection: JsonRejection) -> ValidationError {
    ValidationError::InvalidJson {
        message: rejection.body_text(),
    }
}
