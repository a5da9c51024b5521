//! HTTP handlers for export downloads
//!
//! Each download handler resolves the export set through the service,
//! short-circuits to 204 when the set is empty (per-order invoice excepted,
//! which is 404 on an unknown id), renders in memory, and returns the bytes
//! with attachment headers.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::core::{Order, OrderCriteria, OrderdeskResult};
use crate::export::{render_batch_invoices, render_invoice, render_spreadsheet};

use super::AppState;

/// Timestamp suffix in generated download filenames.
const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

const XLSX_CONTENT_TYPE: &str = "application/octet-stream";
const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Download the filtered order set as a two-sheet XLSX workbook
///
/// GET /api/export/excel?orderNumber=&customerName=&status=&startDate=&endDate=
///
/// Responds 204 when the filtered set is empty.
pub async fn export_excel(
    State(state): State<AppState>,
    Query(criteria): Query<OrderCriteria>,
) -> OrderdeskResult<Response> {
    let orders = state.service.export_set(&criteria).await?;
    if orders.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let bytes = render_spreadsheet(&orders)?;
    let filename = format!(
        "orders_export_{}.xlsx",
        Utc::now().format(FILE_STAMP_FORMAT)
    );
    Ok((attachment_headers(XLSX_CONTENT_TYPE, &filename)?, bytes).into_response())
}

/// Download one order as a PDF invoice
///
/// GET /api/export/invoice/pdf/{order_id}
///
/// Responds 404 when the order does not exist.
pub async fn export_invoice_pdf(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> OrderdeskResult<Response> {
    let order = state.service.get_order(&order_id).await?;
    let bytes = render_invoice(&order)?;
    let filename = format!("invoice_{}.pdf", order.order_number);
    Ok((attachment_headers(PDF_CONTENT_TYPE, &filename)?, bytes).into_response())
}

/// Download the filtered order set as one batch invoice PDF
///
/// GET /api/export/invoice/pdf/batch?orderNumber=&customerName=&status=...
///
/// Responds 204 when the filtered set is empty.
pub async fn export_batch_invoices(
    State(state): State<AppState>,
    Query(criteria): Query<OrderCriteria>,
) -> OrderdeskResult<Response> {
    let orders = state.service.export_set(&criteria).await?;
    if orders.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let bytes = render_batch_invoices(&orders)?;
    let filename = format!(
        "batch_invoices_{}.pdf",
        Utc::now().format(FILE_STAMP_FORMAT)
    );
    Ok((attachment_headers(PDF_CONTENT_TYPE, &filename)?, bytes).into_response())
}

/// Preview the first orders an export with these filters would contain
///
/// GET /api/export/preview?orderNumber=&customerName=&status=&startDate=&endDate=
pub async fn export_preview(
    State(state): State<AppState>,
    Query(criteria): Query<OrderCriteria>,
) -> OrderdeskResult<Json<Vec<Order>>> {
    let orders = state.service.preview(&criteria).await?;
    Ok(Json(orders))
}

fn attachment_headers(content_type: &'static str, filename: &str) -> OrderdeskResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    let disposition = format!("attachment; filename=\"{}\"", filename);
    let value = HeaderValue::from_str(&disposition)
        .map_err(|e| anyhow::anyhow!("invalid download filename {:?}: {}", filename, e))?;
    headers.insert(header::CONTENT_DISPOSITION, value);
    Ok(headers)
}
