//! Core module containing the order domain types

pub mod criteria;
pub mod error;
pub mod order;
pub mod query;
pub mod stats;

pub use criteria::OrderCriteria;
pub use error::{
    ErrorResponse, FieldValidationError, OrderError, OrderdeskError, OrderdeskResult, RenderError,
    StorageError, ValidationError,
};
pub use order::{Order, OrderDraft, OrderStatus};
pub use query::{PageQuery, PaginatedResponse, PaginationMeta};
pub use stats::{OrderStatistics, StatusCounts};
