//! XLSX workbook renderer
//!
//! Renders an order set into a two-sheet workbook: `订单数据` with one row
//! per order under a fixed ten-column header, and `订单统计` with the
//! per-status tally, summed amount and a generation timestamp. The whole
//! workbook is produced in memory via `save_to_buffer`.

use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet};

use crate::core::error::RenderError;
use crate::core::{Order, OrderStatus, OrderdeskResult, StatusCounts};

use super::DATETIME_FORMAT;

const DETAIL_SHEET: &str = "订单数据";
const SUMMARY_SHEET: &str = "订单统计";

const DETAIL_HEADERS: [&str; 10] = [
    "订单号",
    "客户姓名",
    "客户邮箱",
    "客户电话",
    "总金额",
    "订单状态",
    "订单日期",
    "描述",
    "产品详情",
    "创建时间",
];

// Column widths auto-fit content but stay inside this band so a blank or a
// pasted-novel cell cannot produce an unreadable sheet.
const MIN_COL_WIDTH: f64 = 12.0;
const MAX_COL_WIDTH: f64 = 58.0;

/// Render `orders` into a complete XLSX workbook.
///
/// The detail sheet has exactly one row per input order, in input order;
/// the summary is computed over the same set. An empty set still yields a
/// well-formed workbook with a header-only detail sheet.
pub fn render_spreadsheet(orders: &[Order]) -> OrderdeskResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = header_format();
    let data_format = data_format();

    write_detail_sheet(
        workbook.add_worksheet(),
        orders,
        &header_format,
        &data_format,
    )
    .map_err(RenderError::spreadsheet)?;
    write_summary_sheet(
        workbook.add_worksheet(),
        orders,
        &header_format,
        &data_format,
    )
    .map_err(RenderError::spreadsheet)?;

    let bytes = workbook.save_to_buffer().map_err(RenderError::spreadsheet)?;
    tracing::debug!(orders = orders.len(), bytes = bytes.len(), "Rendered workbook");
    Ok(bytes)
}

// Bold white on dark blue with thin borders, for headers and labels.
fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_size(12)
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x000080))
        .set_border(FormatBorder::Thin)
}

fn data_format() -> Format {
    Format::new().set_border(FormatBorder::Thin)
}

fn write_detail_sheet(
    sheet: &mut Worksheet,
    orders: &[Order],
    header_format: &Format,
    data_format: &Format,
) -> Result<(), rust_xlsxwriter::XlsxError> {
    sheet.set_name(DETAIL_SHEET)?;

    // Tracks the widest cell per column, in characters.
    let mut widths = [0usize; 10];

    for (col, header) in DETAIL_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, header_format)?;
        widths[col] = widths[col].max(header.chars().count());
    }

    for (i, order) in orders.iter().enumerate() {
        let row = (i + 1) as u32;
        let amount = order.total_amount.to_f64().unwrap_or(0.0);
        let cells: [String; 10] = [
            order.order_number.clone(),
            order.customer_name.clone(),
            order.customer_email.clone().unwrap_or_default(),
            order.customer_phone.clone().unwrap_or_default(),
            format!("{:.2}", amount), // width only; the cell itself is numeric
            order.status.as_str().to_string(),
            order.order_date.format(DATETIME_FORMAT).to_string(),
            order.description.clone().unwrap_or_default(),
            order.product_details.clone().unwrap_or_default(),
            order.created_at.format(DATETIME_FORMAT).to_string(),
        ];

        for (col, cell) in cells.iter().enumerate() {
            if col == 4 {
                sheet.write_number_with_format(row, 4, amount, data_format)?;
            } else {
                sheet.write_string_with_format(row, col as u16, cell, data_format)?;
            }
            widths[col] = widths[col].max(cell.chars().count());
        }
    }

    for (col, width) in widths.iter().enumerate() {
        sheet.set_column_width(col as u16, clamp_width(*width))?;
    }

    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    orders: &[Order],
    header_format: &Format,
    data_format: &Format,
) -> Result<(), rust_xlsxwriter::XlsxError> {
    sheet.set_name(SUMMARY_SHEET)?;

    let counts = StatusCounts::tally(orders);
    let total_amount: Decimal = orders.iter().map(|o| o.total_amount).sum();

    sheet.write_string_with_format(0, 0, "订单统计报告", header_format)?;

    let rows: [(&str, String); 8] = [
        ("总订单数", counts.total().to_string()),
        ("待处理订单", counts.get(OrderStatus::Pending).to_string()),
        ("已确认订单", counts.get(OrderStatus::Confirmed).to_string()),
        ("处理中订单", counts.get(OrderStatus::Processing).to_string()),
        ("已发货订单", counts.get(OrderStatus::Shipped).to_string()),
        ("已送达订单", counts.get(OrderStatus::Delivered).to_string()),
        ("已取消订单", counts.get(OrderStatus::Cancelled).to_string()),
        ("总金额", format!("¥{:.2}", total_amount)),
    ];

    // Row 1 stays blank between the title and the figures.
    let mut row = 2u32;
    let mut widths = [0usize; 2];
    widths[0] = "订单统计报告".chars().count();

    for (label, value) in &rows {
        sheet.write_string_with_format(row, 0, *label, header_format)?;
        sheet.write_string_with_format(row, 1, value, data_format)?;
        widths[0] = widths[0].max(label.chars().count());
        widths[1] = widths[1].max(value.chars().count());
        row += 1;
    }

    // Blank row, then the generation timestamp.
    row += 1;
    let generated = Utc::now().format(DATETIME_FORMAT).to_string();
    sheet.write_string_with_format(row, 0, "生成时间", header_format)?;
    sheet.write_string_with_format(row, 1, &generated, data_format)?;
    widths[1] = widths[1].max(generated.chars().count());

    sheet.set_column_width(0, clamp_width(widths[0]))?;
    sheet.set_column_width(1, clamp_width(widths[1]))?;

    Ok(())
}

fn clamp_width(chars: usize) -> f64 {
    ((chars + 2) as f64).clamp(MIN_COL_WIDTH, MAX_COL_WIDTH)
}
