/// Represents a customer order as the backend reports it.
///
/// # Resource
/// This struct implements [`ApiResource`](admin_framework::ApiResource), so a
/// [`ResourceClient<Order>`](admin_framework::ResourceClient) can list it from
/// `/admin/orders`. The admin client never creates or edits orders; the only
/// write is a status transition (see [`OrderStatusUpdate`]).
use crate::model::{ProductSnapshot, UserId, UserSnapshot};
use admin_framework::{ApiResource, Unsupported};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle stage of an order.
///
/// ```text
/// PENDING ---> DELIVERING ---> DONE
///    |              |
///    +---> CANCELLED +---> CANCELLED
/// ```
///
/// Transitions are decided by the backend; the client only requests them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Delivering,
    Done,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in board display order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Delivering,
        OrderStatus::Done,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Delivering => "DELIVERING",
            OrderStatus::Done => "DONE",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// `DONE` and `CANCELLED` accept no further transitions from the board.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Done | OrderStatus::Cancelled)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid order status: {0:?} (expected one of PENDING, DELIVERING, DONE, CANCELLED)")]
pub struct ParseStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = ParseStatusError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// One product line within an order.
///
/// `price` is the unit price when the order was placed, not the product's
/// current price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: u64,
    pub quantity: u32,
    pub price: f64,
    pub product: ProductSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub user: UserSnapshot,
}

/// Body of `PATCH /admin/orders/{id}/status`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

impl ApiResource for Order {
    type Id = OrderId;
    type Create = Unsupported;
    type Update = Unsupported;

    const COLLECTION: &'static str = "/admin/orders";
    const LIST_KEY: &'static str = "orders";
    const ITEM_KEY: &'static str = "order";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_json(id: u64, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "userId": 3,
            "totalAmount": 59.5,
            "status": status,
            "createdAt": "2025-03-01T10:15:00Z",
            "items": [{
                "id": 11,
                "quantity": 2,
                "price": 29.75,
                "product": {
                    "id": 4,
                    "name": "Rye Bread",
                    "code": "RB-01",
                    "salePrice": 25.0,
                    "originalPrice": 29.75
                }
            }],
            "user": { "id": 3, "username": "alice", "email": "alice@example.com" }
        })
    }

    #[test]
    fn test_decodes_backend_payload() {
        let order: Order = serde_json::from_value(order_json(1, "DELIVERING")).unwrap();
        assert_eq!(order.id, OrderId(1));
        assert_eq!(order.status, OrderStatus::Delivering);
        assert_eq!(order.items[0].product.code, "RB-01");
        assert_eq!(order.items[0].price, 29.75);
        assert_eq!(order.user.username, "alice");
    }

    #[test]
    fn test_unknown_status_in_payload_is_rejected() {
        let result = serde_json::from_value::<Order>(order_json(1, "SHIPPED"));
        assert!(result.is_err());
    }

    #[test]
    fn test_status_parsing_at_the_boundary() {
        assert_eq!("DONE".parse::<OrderStatus>(), Ok(OrderStatus::Done));
        assert_eq!(" delivering ".parse::<OrderStatus>(), Ok(OrderStatus::Delivering));
        assert_eq!(
            "SHIPPED".parse::<OrderStatus>(),
            Err(ParseStatusError("SHIPPED".to_string()))
        );
        assert!("".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_terminal_states() {
        let terminal: Vec<OrderStatus> = OrderStatus::ALL
            .into_iter()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(terminal, vec![OrderStatus::Done, OrderStatus::Cancelled]);
    }

    #[test]
    fn test_status_update_wire_shape() {
        let body = serde_json::to_value(OrderStatusUpdate {
            status: OrderStatus::Cancelled,
        })
        .unwrap();
        assert_eq!(body, json!({ "status": "CANCELLED" }));
    }

    #[test]
    fn test_member_path_uses_plain_id() {
        assert_eq!(Order::member_path(&OrderId(42)), "/admin/orders/42");
    }
}
