//! Typed error handling for orderdesk
//!
//! This module provides the error type hierarchy that enables clients to
//! handle failures specifically rather than dealing with generic
//! `anyhow::Error` types.
//!
//! # Error Categories
//!
//! - [`OrderError`]: lookup and uniqueness failures on order records
//! - [`ValidationError`]: rejected input (drafts, statuses, dates)
//! - [`StorageError`]: storage backend failures
//! - [`RenderError`]: export renderer failures (workbook / invoice document)
//!
//! Every category maps onto one of the externally-distinguishable families:
//! not-found (404), validation (400, duplicates 409), render (500),
//! store (500).
//!
//! # Example
//!
//! ```rust,ignore
//! use orderdesk::prelude::*;
//!
//! async fn get_order(id: Uuid) -> Result<Order, OrderdeskError> {
//!     store.get(&id).await?.ok_or_else(|| {
//!         OrderdeskError::Order(OrderError::NotFound { id })
//!     })
//! }
//!
//! // Client can match specific errors
//! match result {
//!     Ok(order) => println!("Found: {:?}", order),
//!     Err(OrderdeskError::Order(OrderError::NotFound { id })) => {
//!         println!("Order {} not found", id);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The main error type for orderdesk
///
/// This enum encompasses all possible errors that can occur within the
/// service. Each variant contains a more specific error type for that
/// category.
#[derive(Debug)]
pub enum OrderdeskError {
    /// Order record errors (lookups, uniqueness)
    Order(OrderError),

    /// Input validation errors
    Validation(ValidationError),

    /// Storage backend errors
    Storage(StorageError),

    /// Export renderer errors
    Render(RenderError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for OrderdeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderdeskError::Order(e) => write!(f, "{}", e),
            OrderdeskError::Validation(e) => write!(f, "{}", e),
            OrderdeskError::Storage(e) => write!(f, "{}", e),
            OrderdeskError::Render(e) => write!(f, "{}", e),
            OrderdeskError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for OrderdeskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OrderdeskError::Order(e) => Some(e),
            OrderdeskError::Validation(e) => Some(e),
            OrderdeskError::Storage(e) => Some(e),
            OrderdeskError::Render(e) => Some(e),
            OrderdeskError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl OrderdeskError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderdeskError::Order(e) => e.status_code(),
            OrderdeskError::Validation(_) => StatusCode::BAD_REQUEST,
            OrderdeskError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            OrderdeskError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            OrderdeskError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            OrderdeskError::Order(e) => e.error_code(),
            OrderdeskError::Validation(_) => "VALIDATION_ERROR",
            OrderdeskError::Storage(_) => "STORAGE_ERROR",
            OrderdeskError::Render(e) => e.error_code(),
            OrderdeskError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            OrderdeskError::Order(OrderError::NotFound { id }) => Some(serde_json::json!({
                "id": id.to_string()
            })),
            OrderdeskError::Order(OrderError::NotFoundByNumber { order_number }) => {
                Some(serde_json::json!({
                    "orderNumber": order_number
                }))
            }
            OrderdeskError::Order(OrderError::DuplicateNumber { order_number }) => {
                Some(serde_json::json!({
                    "orderNumber": order_number
                }))
            }
            OrderdeskError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for OrderdeskError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Order Errors
// =============================================================================

/// Errors related to order records
#[derive(Debug)]
pub enum OrderError {
    /// No order with this id
    NotFound { id: Uuid },

    /// No order with this order number
    NotFoundByNumber { order_number: String },

    /// Another order already carries this order number
    DuplicateNumber { order_number: String },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::NotFound { id } => {
                write!(f, "Order with id '{}' not found", id)
            }
            OrderError::NotFoundByNumber { order_number } => {
                write!(f, "Order with number '{}' not found", order_number)
            }
            OrderError::DuplicateNumber { order_number } => {
                write!(f, "Order number '{}' already exists", order_number)
            }
        }
    }
}

impl std::error::Error for OrderError {}

impl OrderError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::NotFound { .. } => StatusCode::NOT_FOUND,
            OrderError::NotFoundByNumber { .. } => StatusCode::NOT_FOUND,
            OrderError::DuplicateNumber { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            OrderError::NotFound { .. } => "ORDER_NOT_FOUND",
            OrderError::NotFoundByNumber { .. } => "ORDER_NOT_FOUND",
            OrderError::DuplicateNumber { .. } => "DUPLICATE_ORDER_NUMBER",
        }
    }
}

impl From<OrderError> for OrderdeskError {
    fn from(err: OrderError) -> Self {
        OrderdeskError::Order(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug)]
pub enum ValidationError {
    /// Single field validation error
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    FieldErrors(Vec<FieldValidationError>),

    /// Unknown order status string
    InvalidStatus { value: String },

    /// Unparseable datetime string
    InvalidDate { value: String },

    /// Invalid JSON format
    InvalidJson { message: String },
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError { field, message } => {
                write!(f, "Validation error for field '{}': {}", field, message)
            }
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ValidationError::InvalidStatus { value } => {
                write!(f, "Unknown order status: '{}'", value)
            }
            ValidationError::InvalidDate { value } => {
                write!(f, "Invalid datetime: '{}'", value)
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "Invalid JSON: {}", message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for OrderdeskError {
    fn from(err: ValidationError) -> Self {
        OrderdeskError::Validation(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug)]
pub enum StorageError {
    /// Connection error
    ConnectionError { backend: String, message: String },

    /// Query execution error
    QueryError { backend: String, message: String },

    /// Data integrity error (corrupt row, poisoned lock)
    IntegrityError { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ConnectionError { backend, message } => {
                write!(f, "Failed to connect to {}: {}", backend, message)
            }
            StorageError::QueryError { backend, message } => {
                write!(f, "{} query error: {}", backend, message)
            }
            StorageError::IntegrityError { message } => {
                write!(f, "Data integrity error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for OrderdeskError {
    fn from(err: StorageError) -> Self {
        OrderdeskError::Storage(err)
    }
}

// =============================================================================
// Render Errors
// =============================================================================

/// Errors raised by the export renderers.
///
/// Backend failures are carried as opaque messages: callers distinguish
/// which renderer failed, nothing more.
#[derive(Debug)]
pub enum RenderError {
    /// Spreadsheet (workbook) rendering failed
    Spreadsheet { message: String },

    /// Invoice document rendering failed
    Invoice { message: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Spreadsheet { message } => {
                write!(f, "Spreadsheet rendering failed: {}", message)
            }
            RenderError::Invoice { message } => {
                write!(f, "Invoice rendering failed: {}", message)
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl RenderError {
    /// Wrap a spreadsheet backend failure.
    pub fn spreadsheet(err: impl fmt::Display) -> Self {
        RenderError::Spreadsheet {
            message: err.to_string(),
        }
    }

    /// Wrap an invoice backend failure.
    pub fn invoice(err: impl fmt::Display) -> Self {
        RenderError::Invoice {
            message: err.to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RenderError::Spreadsheet { .. } => "SPREADSHEET_RENDER_FAILED",
            RenderError::Invoice { .. } => "INVOICE_RENDER_FAILED",
        }
    }
}

impl From<RenderError> for OrderdeskError {
    fn from(err: RenderError) -> Self {
        OrderdeskError::Render(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for OrderdeskError {
    fn from(err: serde_json::Error) -> Self {
        OrderdeskError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for OrderdeskError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                OrderdeskError::Storage(StorageError::ConnectionError {
                    backend: "PostgreSQL".to_string(),
                    message: err.to_string(),
                })
            }
            _ => OrderdeskError::Storage(StorageError::QueryError {
                backend: "PostgreSQL".to_string(),
                message: err.to_string(),
            }),
        }
    }
}

/// Convert from anyhow::Error for boundary code
impl From<anyhow::Error> for OrderdeskError {
    fn from(err: anyhow::Error) -> Self {
        OrderdeskError::Internal(err.to_string())
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for orderdesk operations
pub type OrderdeskResult<T> = Result<T, OrderdeskError>;

// =============================================================================
// Tests
// =============================================================================
