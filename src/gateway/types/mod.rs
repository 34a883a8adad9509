//! Gateway types module
//!
//! ## Input Types
//! - [`CreateOrderRequest`]: order placement body
//! - [`StatusUpdateRequest`]: batch status change body
//!
//! ## Output Types
//! - [`StatusResponse`]: `{status, message, ...}` envelope
//! - [`StatusUpdateItem`]: per-item status change record
//! - [`ApiError`]: handler error (HTTP status + envelope)

pub mod order;
pub mod response;

pub use order::{
    CreateOrderRequest, ProductLineRequest, StatusUpdateEntry, StatusUpdateRequest, loose_integer,
};
pub use response::{
    ApiError, ApiResult, ResultStatus, StatusResponse, StatusUpdateItem, messages,
};
