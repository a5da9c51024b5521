//! PDF invoice renderer
//!
//! Invoices render in two stages: a planner flattens an order (or a batch)
//! into a sequence of layout blocks, and a painter walks the blocks down an
//! A4 page with a moving cursor, starting a new page whenever the next
//! block would cross the bottom margin. The split keeps the layout rules
//! (which blocks appear, in what order, when the optional ones are
//! omitted) testable without parsing PDF output.
//!
//! The builtin PDF fonts only cover WinAnsi, so the bilingual labels use
//! transliteration plus translation (`Dingdan Fapiao / Order Invoice`)
//! rather than the original script.

use chrono::{DateTime, Utc};
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::core::error::RenderError;
use crate::core::{Order, OrderdeskResult};

use super::{DATETIME_FORMAT, SHORT_DATE_FORMAT};

// ============================================================================
// Page geometry (A4, millimetres)
// ============================================================================

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN: f64 = 20.0;
const USABLE_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;
const TOP_Y: f64 = PAGE_HEIGHT - MARGIN;
const BOTTOM_Y: f64 = 25.0;

const MM_PER_PT: f64 = 25.4 / 72.0;
// Helvetica's average glyph advance is close to half the font size.
const AVG_GLYPH_FACTOR: f64 = 0.5;

const TITLE_SIZE: f64 = 20.0;
const HEADING_SIZE: f64 = 14.0;
const BODY_SIZE: f64 = 12.0;
const STAMP_SIZE: f64 = 10.0;

const TITLE_LEAD: f64 = 14.0;
const HEADING_LEAD: f64 = 8.0;
const LINE_LEAD: f64 = 7.0;
const GAP_LEAD: f64 = 6.0;

// Value column of the single-invoice info table starts after a 30% label
// column, matching the 30/70 split of the two-column layout.
const VALUE_COL_X: f64 = MARGIN + USABLE_WIDTH * 0.3;

// Batch table columns at 20/25/20/15/20 percent of the usable width.
const BATCH_COL_X: [f64; 5] = [20.0, 54.0, 96.5, 130.5, 156.0];
// Per-column character budgets; longer cell text is cut at the budget so
// columns cannot run into each other.
const BATCH_COL_CHARS: [usize; 5] = [15, 19, 15, 11, 15];

const BATCH_HEADERS: [&str; 5] = [
    "Dingdan Hao",
    "Kehu Xingming",
    "Zhuangtai",
    "Jin'e",
    "Riqi",
];

// Body text wraps at roughly the usable width in Helvetica body size.
const WRAP_CHARS: usize = 78;

// ============================================================================
// Layout plan
// ============================================================================

/// One layout block of an invoice document, top to bottom.
#[derive(Debug, Clone, PartialEq)]
enum Block {
    /// Centered bold document title.
    Title(String),
    /// Centered order-count line under the batch title.
    CountLine(String),
    /// One bold-label / plain-value row of the info table.
    InfoRow { label: &'static str, value: String },
    /// Bold section heading for an optional free-text block.
    Heading(&'static str),
    /// Free-text body, wrapped by the painter.
    Text(String),
    /// Bold header row of the batch summary table.
    TableHeader,
    /// One batch table row: number, customer, status, amount, short date.
    TableRow([String; 5]),
    /// Centered italic thank-you line.
    Footer(&'static str),
    /// Right-aligned generation timestamp.
    GeneratedAt(String),
    /// Vertical whitespace.
    Gap,
}

const FOOTER_TEXT: &str = "Ganxie nin de dinggou! / Thank you for your order!";

fn generated_at_line(at: DateTime<Utc>) -> Block {
    Block::GeneratedAt(format!(
        "Shengcheng Shijian / Generated at: {}",
        at.format(DATETIME_FORMAT)
    ))
}

/// Flatten one order into the single-invoice block sequence.
///
/// The info table always carries all seven rows (absent optionals render as
/// the empty value); the product-details and description blocks are emitted
/// only when the field is present and non-empty.
fn plan_invoice(order: &Order, generated_at: DateTime<Utc>) -> Vec<Block> {
    let mut blocks = vec![
        Block::Title("Dingdan Fapiao / Order Invoice".to_string()),
        Block::Gap,
    ];

    let info: [(&'static str, String); 7] = [
        ("Dingdan Hao / Order Number:", order.order_number.clone()),
        ("Kehu Xingming / Customer Name:", order.customer_name.clone()),
        (
            "Kehu Youxiang / Email:",
            order.customer_email.clone().unwrap_or_default(),
        ),
        (
            "Kehu Dianhua / Phone:",
            order.customer_phone.clone().unwrap_or_default(),
        ),
        (
            "Dingdan Zhuangtai / Status:",
            order.status.as_str().to_string(),
        ),
        (
            "Dingdan Riqi / Order Date:",
            order.order_date.format(DATETIME_FORMAT).to_string(),
        ),
        (
            "Zong Jin'e / Total Amount:",
            format!("¥{}", order.total_amount),
        ),
    ];
    for (label, value) in info {
        blocks.push(Block::InfoRow { label, value });
    }
    blocks.push(Block::Gap);

    if let Some(details) = order.product_details.as_deref().filter(|s| !s.is_empty()) {
        blocks.push(Block::Heading("Chanpin Xiangqing / Product Details:"));
        blocks.push(Block::Text(details.to_string()));
        blocks.push(Block::Gap);
    }
    if let Some(description) = order.description.as_deref().filter(|s| !s.is_empty()) {
        blocks.push(Block::Heading("Dingdan Miaoshu / Description:"));
        blocks.push(Block::Text(description.to_string()));
        blocks.push(Block::Gap);
    }

    blocks.push(Block::Footer(FOOTER_TEXT));
    blocks.push(generated_at_line(generated_at));
    blocks
}

/// Flatten a batch into the batch-document block sequence: title, count
/// line, five-column table with one row per order in input order, footer
/// and timestamp.
fn plan_batch(orders: &[Order], generated_at: DateTime<Utc>) -> Vec<Block> {
    let mut blocks = vec![
        Block::Title("Piliang Dingdan Fapiao / Batch Order Invoices".to_string()),
        Block::CountLine(format!("Total {} orders", orders.len())),
        Block::Gap,
        Block::TableHeader,
    ];

    for order in orders {
        blocks.push(Block::TableRow([
            order.order_number.clone(),
            order.customer_name.clone(),
            order.status.as_str().to_string(),
            format!("¥{}", order.total_amount),
            order.order_date.format(SHORT_DATE_FORMAT).to_string(),
        ]));
    }

    blocks.push(Block::Gap);
    blocks.push(Block::Footer(FOOTER_TEXT));
    blocks.push(generated_at_line(generated_at));
    blocks
}

// ============================================================================
// Painter
// ============================================================================

struct Painter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
    y: f64,
}

impl Painter {
    fn new(title: &str) -> OrderdeskResult<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH as _), Mm(PAGE_HEIGHT as _), "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(RenderError::invoice)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(RenderError::invoice)?;
        let italic = doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(RenderError::invoice)?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            italic,
            y: TOP_Y,
        })
    }

    /// Start a new page when fewer than `needed` millimetres remain.
    fn ensure_room(&mut self, needed: f64) {
        if self.y - needed < BOTTOM_Y {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH as _), Mm(PAGE_HEIGHT as _), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_Y;
        }
    }

    fn text_at(&self, text: &str, x: f64, size: f64, font: &IndirectFontRef) {
        self.layer
            .use_text(text, size as _, Mm(x as _), Mm(self.y as _), font);
    }

    fn centered(&self, text: &str, size: f64, font: &IndirectFontRef) {
        let x = (PAGE_WIDTH - text_width_mm(text, size)) / 2.0;
        self.text_at(text, x.max(MARGIN), size, font);
    }

    fn paint(&mut self, block: &Block) {
        match block {
            Block::Title(text) => {
                self.ensure_room(TITLE_LEAD);
                self.centered(text, TITLE_SIZE, &self.bold);
                self.y -= TITLE_LEAD;
            }
            Block::CountLine(text) => {
                self.ensure_room(LINE_LEAD);
                self.centered(text, BODY_SIZE, &self.regular);
                self.y -= LINE_LEAD;
            }
            Block::InfoRow { label, value } => {
                self.ensure_room(LINE_LEAD);
                self.text_at(label, MARGIN, BODY_SIZE, &self.bold);
                self.text_at(value, VALUE_COL_X, BODY_SIZE, &self.regular);
                self.y -= LINE_LEAD;
            }
            Block::Heading(text) => {
                self.ensure_room(HEADING_LEAD);
                self.text_at(text, MARGIN, HEADING_SIZE, &self.bold);
                self.y -= HEADING_LEAD;
            }
            Block::Text(text) => {
                for line in wrap_text(text, WRAP_CHARS) {
                    self.ensure_room(LINE_LEAD);
                    self.text_at(&line, MARGIN, BODY_SIZE, &self.regular);
                    self.y -= LINE_LEAD;
                }
            }
            Block::TableHeader => {
                self.ensure_room(LINE_LEAD);
                for (col, header) in BATCH_HEADERS.iter().enumerate() {
                    self.text_at(header, BATCH_COL_X[col], BODY_SIZE, &self.bold);
                }
                self.y -= LINE_LEAD;
            }
            Block::TableRow(cells) => {
                self.ensure_room(LINE_LEAD);
                for (col, cell) in cells.iter().enumerate() {
                    let shown = fit(cell, BATCH_COL_CHARS[col]);
                    self.text_at(&shown, BATCH_COL_X[col], BODY_SIZE, &self.regular);
                }
                self.y -= LINE_LEAD;
            }
            Block::Footer(text) => {
                self.ensure_room(LINE_LEAD);
                self.centered(text, BODY_SIZE, &self.italic);
                self.y -= LINE_LEAD;
            }
            Block::GeneratedAt(text) => {
                self.ensure_room(LINE_LEAD);
                let x = PAGE_WIDTH - MARGIN - text_width_mm(text, STAMP_SIZE);
                self.text_at(text, x.max(MARGIN), STAMP_SIZE, &self.regular);
                self.y -= LINE_LEAD;
            }
            Block::Gap => {
                self.y -= GAP_LEAD;
            }
        }
    }

    fn finish(self) -> OrderdeskResult<Vec<u8>> {
        let bytes = self.doc.save_to_bytes().map_err(RenderError::invoice)?;
        Ok(bytes)
    }
}

fn paint_blocks(doc_title: &str, blocks: &[Block]) -> OrderdeskResult<Vec<u8>> {
    let mut painter = Painter::new(doc_title)?;
    for block in blocks {
        painter.paint(block);
    }
    painter.finish()
}

/// Estimated rendered width of `text`, in millimetres.
fn text_width_mm(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * size * AVG_GLYPH_FACTOR * MM_PER_PT
}

/// Greedy word wrap at `max_chars` characters per line.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Cut `text` at `max_chars` characters.
fn fit(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

// ============================================================================
// Public entry points
// ============================================================================

/// Render one order as a single-invoice PDF.
pub fn render_invoice(order: &Order) -> OrderdeskResult<Vec<u8>> {
    let blocks = plan_invoice(order, Utc::now());
    let bytes = paint_blocks("Order Invoice", &blocks)?;
    tracing::debug!(
        order_number = %order.order_number,
        bytes = bytes.len(),
        "Rendered invoice"
    );
    Ok(bytes)
}

/// Render a batch of orders as one multi-page PDF, one table row per order
/// in input order.
pub fn render_batch_invoices(orders: &[Order]) -> OrderdeskResult<Vec<u8>> {
    let blocks = plan_batch(orders, Utc::now());
    let bytes = paint_blocks("Batch Order Invoices", &blocks)?;
    tracing::debug!(orders = orders.len(), bytes = bytes.len(), "Rendered batch invoices");
    Ok(bytes)
}
