//! Order management
//!
//! Orders, their line items, the store they live in, and the service that
//! implements placement, status changes, deletion, recreation and lookup.

pub mod error;
pub mod models;
pub mod pg;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{OrderError, StoreError};
pub use models::{NewOrder, NewOrderLine, Order, OrderDetail, OrderStatus};
pub use pg::PgOrderStore;
pub use service::{OrderService, PlaceOrder, ProductLine, StatusChange, StatusChangeOutcome};
pub use store::{MemoryOrderStore, OrderStore};
pub use validation::{is_numeric, parse_order_number};
