//! Partitioning of the order list into lifecycle buckets.

use crate::model::{Order, OrderStatus};

/// Orders sharing one status, in the order they arrived from the server.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket<'a> {
    pub status: OrderStatus,
    pub orders: Vec<&'a Order>,
}

/// Orders with `status`, original relative order preserved.
pub fn group(orders: &[Order], status: OrderStatus) -> Vec<&Order> {
    orders.iter().filter(|order| order.status == status).collect()
}

/// Non-empty buckets in display order: PENDING, DELIVERING, DONE, CANCELLED.
pub fn buckets(orders: &[Order]) -> Vec<Bucket<'_>> {
    OrderStatus::ALL
        .into_iter()
        .map(|status| Bucket {
            status,
            orders: group(orders, status),
        })
        .filter(|bucket| !bucket.orders.is_empty())
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::model::{Order, OrderStatus};
    use serde_json::json;

    pub fn order(id: u64, status: OrderStatus) -> Order {
        serde_json::from_value(order_json(id, status.as_str())).unwrap()
    }

    pub fn order_json(id: u64, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "userId": 7,
            "totalAmount": 59.5,
            "status": status,
            "createdAt": "2025-03-01T10:15:00Z",
            "items": [{
                "id": id * 10,
                "quantity": 2,
                "price": 29.75,
                "product": {
                    "id": 3,
                    "name": "Rye Bread",
                    "code": "RB-01",
                    "salePrice": 25.0,
                    "originalPrice": 29.75
                }
            }],
            "user": { "id": 7, "username": "mira", "email": "mira@shop.test" }
        })
    }
}
