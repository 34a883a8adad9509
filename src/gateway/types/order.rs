use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::order::{PlaceOrder, ProductLine, StatusChange, is_numeric};

// ============================================================================
// Loose integer decoding
// ============================================================================

/// Integer value of a JSON number or numeric string.
///
/// `2`, `2.0`, `"2"` and `" 2 "` all give `Some(2)`; fractions, booleans,
/// null and non-numeric strings give `None`.
pub fn loose_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed.parse::<i64>().ok().or_else(|| {
                if is_numeric(trimmed) {
                    trimmed.parse::<f64>().ok().and_then(integral)
                } else {
                    None
                }
            })
        }
        _ => None,
    }
}

fn integral(v: f64) -> Option<i64> {
    (v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64)
        .then_some(v as i64)
}

fn deserialize_loose_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    loose_integer(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("expected an integer, got {}", value)))
}

// ============================================================================
// POST /order/new
// ============================================================================

/// Order placement request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "john.doe@example.com")]
    pub email_address: String,
    pub products: Vec<ProductLineRequest>,
}

/// One product line: catalog product id and quantity
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct ProductLineRequest {
    #[serde(deserialize_with = "deserialize_loose_i64")]
    #[schema(value_type = i64, example = 1)]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_loose_i64")]
    #[schema(value_type = i64, example = 2)]
    pub quantity: i64,
}

impl From<CreateOrderRequest> for PlaceOrder {
    fn from(req: CreateOrderRequest) -> Self {
        PlaceOrder {
            first_name: req.first_name,
            last_name: req.last_name,
            email_address: req.email_address,
            products: req
                .products
                .iter()
                .map(|p| ProductLine {
                    product_id: p.id,
                    quantity: p.quantity,
                })
                .collect(),
        }
    }
}

// ============================================================================
// PUT /orders/status-update
// ============================================================================

/// Batch status change request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct StatusUpdateRequest {
    pub orders: Vec<StatusUpdateEntry>,
}

/// One requested change. Values are kept raw so the response can echo `id`.
///
/// Any JSON value decodes: missing keys, and items that are not objects,
/// leave `id`/`status` as null and are reported per item.
#[derive(Debug, Clone, ToSchema)]
pub struct StatusUpdateEntry {
    #[schema(value_type = Object, example = 12)]
    pub id: Value,
    /// 1 = PENDING, 2 = PROCESSING, 3 = COMPLETED, 4 = CANCELED
    #[schema(value_type = Object, example = 2)]
    pub status: Value,
}

impl From<Value> for StatusUpdateEntry {
    fn from(item: Value) -> Self {
        let field = |key: &str| item.get(key).cloned().unwrap_or(Value::Null);
        StatusUpdateEntry {
            id: field("id"),
            status: field("status"),
        }
    }
}

impl<'de> Deserialize<'de> for StatusUpdateEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(StatusUpdateEntry::from)
    }
}

impl StatusUpdateEntry {
    pub fn to_change(&self) -> StatusChange {
        StatusChange {
            id: loose_integer(&self.id),
            status: loose_integer(&self.status),
        }
    }
}
