use super::error::BoardError;
use super::messages::{BoardEvent, BoardRequest, BoardSnapshot, TransitionOutcome};
use crate::model::{OrderId, OrderStatus};
use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tracing::instrument;

/// Handle to a running [`OrderBoard`](super::OrderBoard).
///
/// Cloneable; the board stops once every handle is dropped.
#[derive(Clone)]
pub struct BoardClient {
    sender: mpsc::Sender<BoardRequest>,
    snapshots: watch::Receiver<BoardSnapshot>,
    events: broadcast::Sender<BoardEvent>,
}

impl BoardClient {
    pub(crate) fn new(
        sender: mpsc::Sender<BoardRequest>,
        snapshots: watch::Receiver<BoardSnapshot>,
        events: broadcast::Sender<BoardEvent>,
    ) -> Self {
        Self {
            sender,
            snapshots,
            events,
        }
    }

    /// Refetches every order and returns the resulting snapshot.
    ///
    /// A failed fetch still answers, with the previous orders.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<BoardSnapshot, BoardError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(BoardRequest::Load { respond_to })
            .await
            .map_err(|_| BoardError::BoardClosed)?;
        response.await.map_err(|_| BoardError::BoardDropped)
    }

    /// Asks the server to move order `id` to `status`, then reloads.
    ///
    /// Returns [`BoardError::TerminalOrder`] without any request when the
    /// current snapshot already shows the order as DONE or CANCELLED.
    #[instrument(skip(self))]
    pub async fn transition(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<TransitionOutcome, BoardError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(BoardRequest::Transition {
                id,
                status,
                respond_to,
            })
            .await
            .map_err(|_| BoardError::BoardClosed)?;
        response.await.map_err(|_| BoardError::BoardDropped)?
    }

    /// The latest published state. Never waits on the board.
    pub fn snapshot(&self) -> BoardSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn events(&self) -> broadcast::Receiver<BoardEvent> {
        self.events.subscribe()
    }

    /// Resolves once the first Load has settled.
    pub async fn wait_until_loaded(&self) -> Result<BoardSnapshot, BoardError> {
        let mut snapshots = self.snapshots.clone();
        let snapshot = snapshots
            .wait_for(|snapshot| !snapshot.loading)
            .await
            .map_err(|_| BoardError::BoardClosed)?;
        Ok(snapshot.clone())
    }
}
