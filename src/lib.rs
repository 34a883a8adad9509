//! Order Desk - order management HTTP backend
//!
//! # Modules
//!
//! - [`order`] - Orders, line items, the store trait and the order service
//! - [`db`] - PostgreSQL connection pool and schema bootstrap
//! - [`catalog`] - Third-party product catalog proxy
//! - [`gateway`] - axum routes, handlers and response envelopes
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing subscriber setup

pub mod catalog;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod order;

// Convenient re-exports at crate root
pub use catalog::CatalogClient;
pub use config::AppConfig;
pub use gateway::state::AppState;
pub use order::{
    MemoryOrderStore, Order, OrderDetail, OrderError, OrderService, OrderStatus, OrderStore,
    PgOrderStore,
};
