//! HTTP handlers for order and export operations

use std::sync::Arc;

use crate::service::OrderService;

pub mod export;
pub mod orders;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<OrderService>,
}

impl AppState {
    pub fn new(service: OrderService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
