//! # Order Board
//!
//! Fetches every order, buckets them by lifecycle stage and forwards status
//! transitions to the backend, refetching after each one.
//!
//! ```text
//!  BoardClient ──mpsc──► OrderBoard task ──► OrderClient ──► Gateway
//!       ▲                    │
//!       └──── watch / broadcast (snapshots, events)
//! ```

mod actor;
mod client;
mod error;
pub mod grouping;
mod messages;

pub use actor::OrderBoard;
pub use client::BoardClient;
pub use error::BoardError;
pub use grouping::{buckets, group, Bucket};
pub use messages::{BoardEvent, BoardRequest, BoardSnapshot, TransitionOutcome};

#[cfg(test)]
mod tests {
    use super::grouping::fixtures::order_json;
    use super::*;
    use crate::clients::OrderClient;
    use crate::model::{OrderId, OrderStatus};
    use admin_framework::mock::MockGateway;
    use admin_framework::ResourceClient;
    use serde_json::json;

    fn spawn_board(mock: &MockGateway) -> (BoardClient, tokio::task::JoinHandle<()>) {
        let (board, client) = OrderBoard::new(8);
        let orders = OrderClient::new(ResourceClient::new(mock.gateway()));
        (client, tokio::spawn(board.run(orders)))
    }

    #[tokio::test]
    async fn test_mount_load_populates_snapshot() {
        let mut mock = MockGateway::new();
        mock.expect_get("/admin/orders").return_ok(json!({
            "orders": [order_json(1, "PENDING"), order_json(2, "DONE")]
        }));
        let (client, handle) = spawn_board(&mock);

        let snapshot = client.wait_until_loaded().await.unwrap();
        assert_eq!(snapshot.orders.len(), 2);
        assert!(!snapshot.loading);

        drop(client);
        handle.await.unwrap();
        mock.verify();
    }

    #[test]
    fn test_unknown_status_maps_to_invalid_status() {
        let result = "SHIPPED".parse::<OrderStatus>().map_err(BoardError::from);

        match result {
            Err(BoardError::InvalidStatus(msg)) => assert!(msg.contains("SHIPPED")),
            other => panic!("Expected InvalidStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_closed_board_reports_closed() {
        let (board, client) = OrderBoard::new(1);
        drop(board);

        assert_eq!(client.load().await, Err(BoardError::BoardClosed));
        assert_eq!(
            client.transition(OrderId(1), OrderStatus::Done).await,
            Err(BoardError::BoardClosed)
        );
    }
}
