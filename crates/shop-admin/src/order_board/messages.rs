use super::error::BoardError;
use crate::model::{Order, OrderId, OrderStatus};
use tokio::sync::oneshot;

/// What the board currently knows.
///
/// `orders` is in server order. `loading` starts `true` and flips to `false`
/// once the first Load settles, whatever its outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub orders: Vec<Order>,
    pub loading: bool,
}

impl BoardSnapshot {
    pub(crate) fn initial() -> Self {
        Self {
            orders: Vec::new(),
            loading: true,
        }
    }

    pub fn find(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }
}

/// How a forwarded transition went on the server side.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    Applied,
    /// The PATCH failed; the message is the backend or transport error.
    Failed(String),
}

/// Observable record of every board outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    Loaded {
        count: usize,
    },
    LoadFailed {
        error: String,
    },
    TransitionApplied {
        id: OrderId,
        status: OrderStatus,
    },
    TransitionFailed {
        id: OrderId,
        status: OrderStatus,
        error: String,
    },
    TransitionRejected {
        id: OrderId,
        status: OrderStatus,
        current: OrderStatus,
    },
}

/// Requests processed by the board task, one at a time.
#[derive(Debug)]
pub enum BoardRequest {
    Load {
        respond_to: oneshot::Sender<BoardSnapshot>,
    },
    Transition {
        id: OrderId,
        status: OrderStatus,
        respond_to: oneshot::Sender<Result<TransitionOutcome, BoardError>>,
    },
}
