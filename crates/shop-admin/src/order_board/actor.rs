//! # Order Board Task
//!
//! The `OrderBoard` owns the order list and processes [`BoardRequest`]s
//! sequentially in its own task, the way a resource actor owns its store.
//! No locks guard the list: only this task writes it, and readers get
//! snapshots through a `watch` channel.
//!
//! ## Consistency
//!
//! The server is the only source of truth. The board never edits an order
//! locally; after every forwarded transition, failed or not, it refetches the
//! whole collection exactly once. Because the PATCH and its follow-up Load
//! both finish before the next request is taken off the queue, transitions
//! reach the server in submission order.
//!
//! ## Failures
//!
//! Load and PATCH failures never escape the task. Each one is logged with
//! `tracing` and published as a [`BoardEvent`]; a failed Load keeps the
//! previous orders.

use super::client::BoardClient;
use super::error::BoardError;
use super::messages::{BoardEvent, BoardRequest, BoardSnapshot, TransitionOutcome};
use crate::clients::OrderClient;
use crate::model::{OrderId, OrderStatus};
use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, info, warn};

/// Capacity of the event channel; slow subscribers see `Lagged`.
const EVENT_CAPACITY: usize = 64;

/// The server half of the board: owns the order list and the request queue.
///
/// Create it with [`OrderBoard::new`], which also returns the
/// [`BoardClient`] used to talk to it, then spawn [`OrderBoard::run`]:
///
/// ```rust,ignore
/// let (board, client) = OrderBoard::new(32);
/// let mut events = client.events();
/// tokio::spawn(board.run(order_client));
/// let snapshot = client.wait_until_loaded().await?;
/// ```
///
/// * **Load** replaces the orders wholesale on success and always clears `loading`.
/// * **Transition** refuses orders the snapshot shows as terminal, otherwise
///   sends the PATCH and reloads once, whatever the PATCH returned.
pub struct OrderBoard {
    receiver: mpsc::Receiver<BoardRequest>,
    state: watch::Sender<BoardSnapshot>,
    events: broadcast::Sender<BoardEvent>,
}

impl OrderBoard {
    /// Creates the board and its handle.
    ///
    /// `buffer_size` bounds the request queue; callers wait when it is full.
    /// Subscribe to events on the returned client before calling
    /// [`run`](Self::run) to observe the initial Load.
    pub fn new(buffer_size: usize) -> (Self, BoardClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (state, snapshots) = watch::channel(BoardSnapshot::initial());
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let client = BoardClient::new(sender, snapshots, events.clone());
        let board = Self {
            receiver,
            state,
            events,
        };
        (board, client)
    }

    /// Loads once, then serves requests until every client is dropped.
    ///
    /// The order client is injected here rather than at construction, so the
    /// board can be created before the gateway is wired.
    pub async fn run(mut self, orders_api: OrderClient) {
        info!("Order board started");
        self.load(&orders_api).await;

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                BoardRequest::Load { respond_to } => {
                    debug!("Load");
                    let snapshot = self.load(&orders_api).await;
                    let _ = respond_to.send(snapshot);
                }
                BoardRequest::Transition {
                    id,
                    status,
                    respond_to,
                } => {
                    debug!(%id, %status, "Transition");
                    let result = self.transition(&orders_api, id, status).await;
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(size = self.state.borrow().orders.len(), "Order board shutdown");
    }

    async fn load(&self, orders_api: &OrderClient) -> BoardSnapshot {
        match orders_api.list_orders().await {
            Ok(orders) => {
                let count = orders.len();
                self.state.send_modify(|snapshot| {
                    snapshot.orders = orders;
                    snapshot.loading = false;
                });
                info!(count, "Orders loaded");
                self.emit(BoardEvent::Loaded { count });
            }
            Err(e) => {
                self.state.send_modify(|snapshot| snapshot.loading = false);
                warn!(error = %e, "Failed to load orders");
                self.emit(BoardEvent::LoadFailed {
                    error: e.to_string(),
                });
            }
        }
        self.state.borrow().clone()
    }

    async fn transition(
        &self,
        orders_api: &OrderClient,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<TransitionOutcome, BoardError> {
        let terminal = self
            .state
            .borrow()
            .find(id)
            .map(|order| order.status)
            .filter(|current| current.is_terminal());
        if let Some(current) = terminal {
            warn!(%id, %status, %current, "Transition rejected: order is terminal");
            self.emit(BoardEvent::TransitionRejected {
                id,
                status,
                current,
            });
            return Err(BoardError::TerminalOrder {
                id,
                status: current,
            });
        }

        let outcome = match orders_api.update_status(id, status).await {
            Ok(()) => {
                info!(%id, %status, "Status updated");
                self.emit(BoardEvent::TransitionApplied { id, status });
                TransitionOutcome::Applied
            }
            Err(e) => {
                warn!(%id, %status, error = %e, "Failed to update order status");
                self.emit(BoardEvent::TransitionFailed {
                    id,
                    status,
                    error: e.to_string(),
                });
                TransitionOutcome::Failed(e.to_string())
            }
        };

        self.load(orders_api).await;
        Ok(outcome)
    }

    fn emit(&self, event: BoardEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}
