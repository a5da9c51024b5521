//! Sample order seeding
//!
//! Opt-in startup seeding (`seed_sample_data: true` in the configuration).
//! The sample set only goes in when the store is empty, so restarting
//! against a persistent backend never duplicates it.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use crate::core::{OrderDraft, OrderStatus, OrderdeskResult};
use crate::service::OrderService;

/// Days of backdating added per sample order position.
const BACKDATE_STEP_DAYS: i64 = 3;

/// Seed the store with eight sample orders.
///
/// Each order is backdated by a fixed, increasing offset (the first sample
/// is the most recent), which keeps the default date-ordered views
/// deterministic. Returns the number of orders created, zero when the
/// store already had data.
pub async fn seed_sample_orders(service: &OrderService) -> OrderdeskResult<usize> {
    if service.count().await? > 0 {
        tracing::debug!("Store already has orders, skipping sample data");
        return Ok(0);
    }

    let drafts = sample_drafts();
    let total = drafts.len();
    for (i, mut draft) in drafts.into_iter().enumerate() {
        draft.order_date = Some(Utc::now() - Duration::days((i as i64 + 1) * BACKDATE_STEP_DAYS));
        service.create_order(draft).await?;
    }

    tracing::info!(orders = total, "Seeded sample orders");
    Ok(total)
}

struct Sample {
    number: &'static str,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    amount: Decimal,
    status: OrderStatus,
    description: &'static str,
    details: &'static str,
}

impl Sample {
    fn into_draft(self) -> OrderDraft {
        let mut draft = OrderDraft::new(self.number, self.name, self.amount, self.status);
        draft.customer_email = Some(self.email.to_string());
        draft.customer_phone = Some(self.phone.to_string());
        draft.description = Some(self.description.to_string());
        draft.product_details = Some(self.details.to_string());
        draft
    }
}

fn sample_drafts() -> Vec<OrderDraft> {
    let samples = [
        Sample {
            number: "ORD-2024-001",
            name: "Zhang San",
            email: "zhangsan@email.com",
            phone: "13800138001",
            amount: Decimal::new(29999, 2),
            status: OrderStatus::Delivered,
            description: "Electronics order",
            details: "iPhone 15 Pro Max - 256GB Deep Space Black",
        },
        Sample {
            number: "ORD-2024-002",
            name: "Li Si",
            email: "lisi@email.com",
            phone: "13800138002",
            amount: Decimal::new(129950, 2),
            status: OrderStatus::Processing,
            description: "Furniture order",
            details: "Solid wood desk with ergonomic chair set",
        },
        Sample {
            number: "ORD-2024-003",
            name: "Wang Wu",
            email: "wangwu@email.com",
            phone: "13800138003",
            amount: Decimal::new(8990, 2),
            status: OrderStatus::Shipped,
            description: "Apparel order",
            details: "Spring collection dress - blue, size M",
        },
        Sample {
            number: "ORD-2024-004",
            name: "Zhao Liu",
            email: "zhaoliu@email.com",
            phone: "13800138004",
            amount: Decimal::new(299900, 2),
            status: OrderStatus::Confirmed,
            description: "Appliance order",
            details: "Haier inverter air conditioner - 1.5 HP",
        },
        Sample {
            number: "ORD-2024-005",
            name: "Sun Qi",
            email: "sunqi@email.com",
            phone: "13800138005",
            amount: Decimal::new(59999, 2),
            status: OrderStatus::Pending,
            description: "Sporting goods",
            details: "Nike Air Jordan basketball shoes - size 42",
        },
        Sample {
            number: "ORD-2024-006",
            name: "Zhou Ba",
            email: "zhouba@email.com",
            phone: "13800138006",
            amount: Decimal::new(15990, 2),
            status: OrderStatus::Cancelled,
            description: "Beauty products",
            details: "SK-II Facial Treatment Essence 230ml",
        },
        Sample {
            number: "ORD-2024-007",
            name: "Wu Jiu",
            email: "wujiu@email.com",
            phone: "13800138007",
            amount: Decimal::new(399900, 2),
            status: OrderStatus::Delivered,
            description: "Digital products",
            details: "MacBook Air M2 - 512GB Starlight",
        },
        Sample {
            number: "ORD-2024-008",
            name: "Zheng Shi",
            email: "zhengshi@email.com",
            phone: "13800138008",
            amount: Decimal::new(79999, 2),
            status: OrderStatus::Processing,
            description: "Kitchen appliances",
            details: "Joyoung soy milk maker with air fryer set",
        },
    ];
    samples.into_iter().map(Sample::into_draft).collect()
}
