//! Quickstart: seed sample orders, query them, render exports to disk
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use std::sync::Arc;

use orderdesk::prelude::*;
use orderdesk::seed::seed_sample_orders;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("🚀 Orderdesk Quickstart\n");

    let service = OrderService::new(Arc::new(InMemoryOrderStore::new()));

    let seeded = seed_sample_orders(&service).await?;
    println!("✅ Seeded {} sample orders\n", seeded);

    // Filtered search: delivered orders only
    let delivered = service
        .search_orders(
            &OrderCriteria::new().with_status(OrderStatus::Delivered),
            &PageQuery::new(1, 10),
        )
        .await?;
    println!("📦 Delivered orders ({}):", delivered.pagination.total);
    for order in &delivered.data {
        println!(
            "   - {} | {} | ¥{}",
            order.order_number, order.customer_name, order.total_amount
        );
    }

    let stats = service.statistics().await?;
    println!(
        "\n📊 Statistics: {} total, {} pending, {} processing, {} delivered",
        stats.total_orders, stats.pending_orders, stats.processing_orders, stats.delivered_orders
    );

    // Render all three export artifacts into the temp directory
    let orders = service.export_set(&OrderCriteria::new()).await?;
    let dir = std::env::temp_dir();

    let workbook_path = dir.join("orderdesk_quickstart.xlsx");
    std::fs::write(&workbook_path, render_spreadsheet(&orders)?)?;
    println!("\n📄 Workbook:       {}", workbook_path.display());

    let invoice_path = dir.join(format!("invoice_{}.pdf", orders[0].order_number));
    std::fs::write(&invoice_path, render_invoice(&orders[0])?)?;
    println!("📄 Invoice:        {}", invoice_path.display());

    let batch_path = dir.join("orderdesk_batch_invoices.pdf");
    std::fs::write(&batch_path, render_batch_invoices(&orders)?)?;
    println!("📄 Batch invoices: {}", batch_path.display());

    Ok(())
}
