//! Response envelopes and the error type handlers return
//!
//! - `StatusResponse`: `{status, message, ...}` envelope
//! - `StatusUpdateItem`: per-item record of a batch status change
//! - `ApiError`: HTTP status + envelope, converted from service errors

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::order::{OrderError, StatusChangeOutcome};

/// Response messages
pub mod messages {
    pub const ALIVE: &str = "I'm alive and well :)";
    pub const ORDER_PLACED: &str = "Order has been placed";
    pub const ORDER_PLACE_FAILED: &str = "There was an error during placing order";
    pub const WRONG_STATUS: &str = "Wrong status value";
    pub const ORDER_MISSING: &str = "Order doesn't exist";
    pub const STATUS_CHANGED: &str = "Order status changed";
    pub const STATUS_CHANGE_FAILED: &str = "Order status couldn't be changed";
    pub const WRONG_ORDER_NUMBER: &str = "Wrong order number";
    pub const ORDER_DELETED: &str = "Order deleted successfully";
    pub const ORDER_RECREATED: &str = "Order recreated successfully";
    pub const INVALID_BODY: &str = "Invalid request body";
    pub const INTERNAL_ERROR: &str = "Internal server error";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Success,
    Error,
}

/// Standard envelope
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: ResultStatus,
    #[schema(example = "Order has been placed")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    /// Underlying error text (order placement failures only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_status: Option<String>,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ResultStatus::Success,
            message: message.into(),
            order_id: None,
            error_status: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResultStatus::Error,
            message: message.into(),
            order_id: None,
            error_status: None,
        }
    }

    pub fn with_order_id(mut self, order_id: i64) -> Self {
        self.order_id = Some(order_id);
        self
    }

    pub fn with_error_status(mut self, error_status: impl Into<String>) -> Self {
        self.error_status = Some(error_status.into());
        self
    }
}

/// Per-item status change record. `id` echoes the submitted value.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StatusUpdateItem {
    pub status: ResultStatus,
    #[schema(value_type = Object, example = 12)]
    pub id: serde_json::Value,
    pub message: String,
}

impl StatusUpdateItem {
    pub fn from_outcome(id: serde_json::Value, outcome: &StatusChangeOutcome) -> Self {
        let (status, message) = match outcome {
            StatusChangeOutcome::Changed(_) => (ResultStatus::Success, messages::STATUS_CHANGED),
            StatusChangeOutcome::NotFound => (ResultStatus::Error, messages::ORDER_MISSING),
            StatusChangeOutcome::InvalidStatus => (ResultStatus::Error, messages::WRONG_STATUS),
            StatusChangeOutcome::Failed(_) => {
                (ResultStatus::Error, messages::STATUS_CHANGE_FAILED)
            }
        };
        Self {
            status,
            id,
            message: message.to_string(),
        }
    }
}

/// Handler error: HTTP status plus envelope body
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: StatusResponse,
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, body: StatusResponse) -> Self {
        Self { status, body }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, StatusResponse::error(message))
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::InvalidOrderNumber(_) => Self::new(
                StatusCode::FORBIDDEN,
                StatusResponse::error(messages::WRONG_ORDER_NUMBER),
            ),
            OrderError::NotFound(_) => Self::new(
                StatusCode::NOT_FOUND,
                StatusResponse::error(messages::ORDER_MISSING),
            ),
            OrderError::InvalidRequest(_) => Self::bad_request(messages::INVALID_BODY),
            OrderError::Store(e) => {
                tracing::error!(error = %e, "Order store failure");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    StatusResponse::error(messages::INTERNAL_ERROR),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{OrderStatus, StoreError};
    use serde_json::json;

    #[test]
    fn test_envelope_omits_absent_fields() {
        let body = serde_json::to_value(StatusResponse::success(messages::ORDER_DELETED)).unwrap();
        assert_eq!(
            body,
            json!({"status": "success", "message": "Order deleted successfully"})
        );
    }

    #[test]
    fn test_envelope_extra_fields_are_camel_case() {
        let placed = StatusResponse::success(messages::ORDER_PLACED).with_order_id(7);
        assert_eq!(
            serde_json::to_value(placed).unwrap(),
            json!({"status": "success", "message": "Order has been placed", "orderId": 7})
        );

        let failed = StatusResponse::error(messages::ORDER_PLACE_FAILED).with_error_status("boom");
        assert_eq!(
            serde_json::to_value(failed).unwrap(),
            json!({
                "status": "error",
                "message": "There was an error during placing order",
                "errorStatus": "boom"
            })
        );
    }

    #[test]
    fn test_status_update_items() {
        let completed = StatusChangeOutcome::Changed(OrderStatus::Completed);
        let changed = StatusUpdateItem::from_outcome(json!(3), &completed);
        assert_eq!(
            serde_json::to_value(changed).unwrap(),
            json!({"status": "success", "id": 3, "message": "Order status changed"})
        );

        let invalid =
            StatusUpdateItem::from_outcome(json!("3"), &StatusChangeOutcome::InvalidStatus);
        assert_eq!(invalid.status, ResultStatus::Error);
        assert_eq!(invalid.message, "Wrong status value");
        assert_eq!(invalid.id, json!("3"));

        let failed =
            StatusUpdateItem::from_outcome(json!(1), &StatusChangeOutcome::Failed("x".into()));
        assert_eq!(failed.message, "Order status couldn't be changed");
    }

    #[test]
    fn test_order_error_mapping() {
        let e = ApiError::from(OrderError::InvalidOrderNumber("abc".into()));
        assert_eq!(e.status, StatusCode::FORBIDDEN);
        assert_eq!(e.body.message, "Wrong order number");

        let e = ApiError::from(OrderError::NotFound("9".into()));
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.body.message, "Order doesn't exist");

        let e = ApiError::from(OrderError::InvalidRequest("no orders".into()));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.body.message, "Invalid request body");
        assert!(e.body.error_status.is_none());

        // Store details stay in the log, not the response
        let e = ApiError::from(OrderError::Store(StoreError::Integrity("secret".into())));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(e.body.error_status.is_none());
    }
}
