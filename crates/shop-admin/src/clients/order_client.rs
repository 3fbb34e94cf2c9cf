//! # Order Client
//!
//! Provides a high‑level API for the `/admin/orders` resource.
//! It wraps a `ResourceClient<Order>` and adds the status transition call.
use crate::error::OrderError;
use crate::model::{Order, OrderId, OrderStatus, OrderStatusUpdate};
use admin_framework::{GatewayError, ResourceApi, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for the order endpoints.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// `GET /admin/orders`, in server order.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        debug!(count = orders.len(), "Orders fetched");
        Ok(orders)
    }

    /// `PATCH /admin/orders/{id}/status` with `{ "status": ... }`.
    ///
    /// The response body is ignored; callers reload to see the result.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<(), OrderError> {
        info!("Sending status update");
        self.inner
            .perform_action(id, "status", &OrderStatusUpdate { status })
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ResourceApi<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: GatewayError) -> Self::Error {
        OrderError::ApiCommunicationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_framework::mock::MockGateway;
    use admin_framework::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_update_status_sends_patch_with_body() {
        let mut mock = MockGateway::new();
        mock.expect_patch("/admin/orders/1/status")
            .return_ok(json!({ "message": "updated" }));
        let client = OrderClient::new(ResourceClient::new(mock.gateway()));

        client
            .update_status(OrderId(1), OrderStatus::Delivering)
            .await
            .unwrap();

        let sent = mock.requests();
        assert_eq!(sent[0].method, Method::Patch);
        assert_eq!(sent[0].body, Some(json!({ "status": "DELIVERING" })));
        mock.verify();
    }

    #[tokio::test]
    async fn test_list_orders_empty_collection() {
        let mut mock = MockGateway::new();
        mock.expect_get("/admin/orders")
            .return_ok(json!({ "orders": [] }));
        let client = OrderClient::new(ResourceClient::new(mock.gateway()));

        assert!(client.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_gateway_failure_maps_to_communication_error() {
        let mut mock = MockGateway::new();
        mock.expect_get("/admin/orders")
            .return_err(GatewayError::Unauthorized("jwt expired".to_string()));
        let client = OrderClient::new(ResourceClient::new(mock.gateway()));

        match client.list_orders().await {
            Err(OrderError::ApiCommunicationError(msg)) => assert!(msg.contains("jwt expired")),
            other => panic!("Expected ApiCommunicationError, got {other:?}"),
        }
    }
}
