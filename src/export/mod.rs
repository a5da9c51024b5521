//! Export renderers
//!
//! Pure order-set-to-bytes renderers: [`spreadsheet`] builds the two-sheet
//! XLSX workbook and [`invoice`] the single and batch PDF invoices. Both
//! run entirely in memory and never touch a store; which orders go in (and
//! what an empty set means) is decided by the caller.

pub mod invoice;
pub mod spreadsheet;

pub use invoice::{render_batch_invoices, render_invoice};
pub use spreadsheet::render_spreadsheet;

/// Timestamp format used in exported cells and generated-at lines.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Compact month-day format used in the batch invoice table.
pub const SHORT_DATE_FORMAT: &str = "%m-%d";
