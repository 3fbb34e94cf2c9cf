use crate::model::{OrderId, OrderStatus, ParseStatusError};
use thiserror::Error;

/// Failures of a [`BoardClient`](super::BoardClient) call.
///
/// Backend failures never show up here; the board absorbs them and reports
/// them as [`BoardEvent`](super::BoardEvent)s.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BoardError {
    #[error("Order board is not running")]
    BoardClosed,

    #[error("Order board dropped the request before answering")]
    BoardDropped,

    #[error("Order {id} is {status}; no further transitions are allowed")]
    TerminalOrder { id: OrderId, status: OrderStatus },

    #[error("{0}")]
    InvalidStatus(String),
}

impl From<ParseStatusError> for BoardError {
    fn from(e: ParseStatusError) -> Self {
        BoardError::InvalidStatus(e.to_string())
    }
}
