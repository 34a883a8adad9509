//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::types::{
    CreateOrderRequest, ProductLineRequest, ResultStatus, StatusResponse, StatusUpdateEntry,
    StatusUpdateItem, StatusUpdateRequest,
};
use crate::order::{Order, OrderDetail};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Desk API",
        version = "1.0.0",
        description = "Order placement, status management and product catalog passthrough.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::work_check,
        crate::gateway::handlers::list_products,
        crate::gateway::handlers::create_order,
        crate::gateway::handlers::update_statuses,
        crate::gateway::handlers::delete_order,
        crate::gateway::handlers::recreate_order,
        crate::gateway::handlers::order_quantities,
    ),
    components(
        schemas(
            CreateOrderRequest,
            ProductLineRequest,
            StatusUpdateRequest,
            StatusUpdateEntry,
            StatusUpdateItem,
            StatusResponse,
            ResultStatus,
            Order,
            OrderDetail,
        )
    ),
    tags(
        (name = "Orders", description = "Order placement and management"),
        (name = "Catalog", description = "Third-party product catalog"),
        (name = "System", description = "Liveness")
    )
)]
pub struct ApiDoc;
