//! Order handlers (create, status update, delete, recreate, quantities)

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use crate::order::{OrderError, PlaceOrder, StatusChange};

use super::super::state::AppState;
use super::super::types::{
    ApiError, ApiResult, CreateOrderRequest, StatusResponse, StatusUpdateItem, StatusUpdateRequest,
    messages,
};

/// Create order endpoint
///
/// Every failure, including an undecodable body, answers 403 with the
/// underlying error text in `errorStatus`.
#[utoipa::path(
    post,
    path = "/order/new",
    request_body(content = CreateOrderRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Order placed", body = StatusResponse),
        (status = 403, description = "Order could not be placed", body = StatusResponse)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> (StatusCode, Json<StatusResponse>) {
    let placed = match serde_json::from_slice::<CreateOrderRequest>(&body) {
        Ok(req) => state.orders.create_order(PlaceOrder::from(req)).await,
        Err(e) => Err(OrderError::InvalidRequest(e.to_string())),
    };

    match placed {
        Ok(order) => (
            StatusCode::OK,
            Json(StatusResponse::success(messages::ORDER_PLACED).with_order_id(order.id)),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Order placement failed");
            let error_status = match e {
                OrderError::InvalidRequest(reason) => reason,
                other => other.to_string(),
            };
            (
                StatusCode::FORBIDDEN,
                Json(
                    StatusResponse::error(messages::ORDER_PLACE_FAILED)
                        .with_error_status(error_status),
                ),
            )
        }
    }
}

/// Batch status update endpoint
///
/// Always 200 for a decodable body; per-item failures are reported inline,
/// in request order.
#[utoipa::path(
    put,
    path = "/orders/status-update",
    request_body(content = StatusUpdateRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "One record per submitted item", body = [StatusUpdateItem]),
        (status = 400, description = "Body is not a status update request", body = StatusResponse)
    ),
    tag = "Orders"
)]
pub async fn update_statuses(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Vec<StatusUpdateItem>> {
    let req: StatusUpdateRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected status update body");
        ApiError::bad_request(messages::INVALID_BODY)
    })?;

    let changes: Vec<StatusChange> = req.orders.iter().map(|e| e.to_change()).collect();
    let outcomes = state.orders.change_statuses(&changes).await;

    let items = req
        .orders
        .into_iter()
        .zip(&outcomes)
        .map(|(entry, outcome)| StatusUpdateItem::from_outcome(entry.id, outcome))
        .collect();

    Ok(Json(items))
}

/// Delete order endpoint
#[utoipa::path(
    delete,
    path = "/order/delete/{orderNumber}",
    params(("orderNumber" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order and its lines deleted", body = StatusResponse),
        (status = 403, description = "Order number is not numeric", body = StatusResponse),
        (status = 404, description = "Order not found", body = StatusResponse)
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    Path(order_number): Path<String>,
) -> ApiResult<StatusResponse> {
    state.orders.delete_order(&order_number).await?;
    Ok(Json(StatusResponse::success(messages::ORDER_DELETED)))
}

/// Recreate order endpoint
///
/// Places a new PENDING order with the same contact details and lines.
#[utoipa::path(
    post,
    path = "/order/recreate/{orderNumber}",
    params(("orderNumber" = String, Path, description = "Id of the order to copy")),
    responses(
        (status = 200, description = "New order placed", body = StatusResponse),
        (status = 403, description = "Order number is not numeric", body = StatusResponse),
        (status = 404, description = "Order not found", body = StatusResponse)
    ),
    tag = "Orders"
)]
pub async fn recreate_order(
    State(state): State<Arc<AppState>>,
    Path(order_number): Path<String>,
) -> ApiResult<StatusResponse> {
    let order = state.orders.recreate_order(&order_number).await?;
    Ok(Json(
        StatusResponse::success(messages::ORDER_RECREATED).with_order_id(order.id),
    ))
}

/// Order quantities endpoint
///
/// Success is a bare array of line quantities; errors use the envelope.
#[utoipa::path(
    get,
    path = "/order/{orderNumber}",
    params(("orderNumber" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Line quantities in insertion order", body = [i32]),
        (status = 403, description = "Order number is not numeric", body = StatusResponse),
        (status = 404, description = "Order not found", body = StatusResponse)
    ),
    tag = "Orders"
)]
pub async fn order_quantities(
    State(state): State<Arc<AppState>>,
    Path(order_number): Path<String>,
) -> ApiResult<Vec<i32>> {
    let quantities = state.orders.order_quantities(&order_number).await?;
    Ok(Json(quantities))
}

/// `GET /order/new`: the placement path read as an order number.
pub async fn order_quantities_at_new(State(state): State<Arc<AppState>>) -> ApiResult<Vec<i32>> {
    order_quantities(State(state), Path("new".to_string())).await
}
