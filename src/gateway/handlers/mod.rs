//! HTTP handlers
//!
//! Thin adapters: decode the request, call the order service or the
//! catalog client, encode the response.

pub mod catalog;
pub mod health;
pub mod order;

pub use catalog::{__path_list_products, list_products};
pub use health::{__path_work_check, work_check};
pub use order::{
    __path_create_order, __path_delete_order, __path_order_quantities, __path_recreate_order,
    __path_update_statuses, create_order, delete_order, order_quantities, order_quantities_at_new,
    recreate_order, update_statuses,
};
