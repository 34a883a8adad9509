//! Order and line-item models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order lifecycle marker. Any value may be set from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum OrderStatus {
    Pending = 1,
    Processing = 2,
    Completed = 3,
    Canceled = 4,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Completed,
        OrderStatus::Canceled,
    ];

    /// Stored integer code
    pub fn id(self) -> i16 {
        self as i16
    }

    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(OrderStatus::Pending),
            2 => Some(OrderStatus::Processing),
            3 => Some(OrderStatus::Completed),
            4 => Some(OrderStatus::Canceled),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Canceled => "CANCELED",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Wire format is the integer code, not the name
impl Serialize for OrderStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i16(self.id())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = i64::deserialize(deserializer)?;
        OrderStatus::from_id(id)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown order status {}", id)))
    }
}

/// Persisted order
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    /// 1 = PENDING, 2 = PROCESSING, 3 = COMPLETED, 4 = CANCELED
    #[schema(value_type = i16, example = 1)]
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Persisted line item. `order_id` is a back-reference looked up by value.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
}

/// Order fields supplied before the store assigns an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl NewOrder {
    /// A fresh PENDING order stamped with the current time
    pub fn pending(first_name: String, last_name: String, email_address: String) -> Self {
        Self {
            first_name,
            last_name,
            email_address,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

/// Line item fields supplied before the store assigns ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrderLine {
    pub product_id: i64,
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_roundtrip() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_id(status.id() as i64), Some(status));
        }
        assert_eq!(OrderStatus::from_id(0), None);
        assert_eq!(OrderStatus::from_id(5), None);
        assert_eq!(OrderStatus::from_id(99), None);
    }

    #[test]
    fn test_status_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&OrderStatus::Completed).unwrap(), "3");
        let parsed: OrderStatus = serde_json::from_str("4").unwrap();
        assert_eq!(parsed, OrderStatus::Canceled);
        assert!(serde_json::from_str::<OrderStatus>("7").is_err());
    }

    #[test]
    fn test_new_order_is_pending() {
        let order = NewOrder::pending("Ada".into(), "Lovelace".into(), "ada@example.com".into());
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.first_name, "Ada");
    }
}
