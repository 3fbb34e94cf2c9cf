//! # System Lifecycle & Orchestration
//!
//! [`AdminSystem`] builds the shared gateway, hands it to every resource
//! client and starts the order board on demand.
//!
//! ## Wiring
//!
//! ```text
//!  TokenStore ──► HttpGateway ──┬──► SessionClient
//!                               ├──► ProductClient
//!                               └──► OrderClient ──► OrderBoard task
//!  ImageHostConfig ──► ImageClient (asset host, no session token)
//! ```
//!
//! The board receives its `OrderClient` through `run(..)`, after the board
//! and its handle already exist. It is only started by
//! [`AdminSystem::open_order_board`], so product commands never fetch orders.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the board handle** - closes the request channel
//! 2. **Board detects closure** - finishes the in-flight request, logs, exits
//! 3. **Await completion** - [`AdminSystem::shutdown`] joins the task

use crate::clients::{ImageClient, OrderClient, ProductClient, SessionClient};
use crate::config::AdminConfig;
use crate::error::SessionError;
use crate::order_board::{BoardClient, OrderBoard};
use admin_framework::{Gateway, GatewayConfig, HttpGateway, ResourceClient, TokenStore};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub struct AdminSystem {
    pub session: SessionClient,
    pub products: ProductClient,
    pub orders: OrderClient,
    /// `None` when no image host is configured.
    pub images: Option<ImageClient>,
    board: Option<BoardClient>,
    board_buffer: usize,
    handles: Vec<JoinHandle<()>>,
}

impl AdminSystem {
    /// Builds the HTTP gateway from `config`; the token is read from
    /// `config.token_file` on every request.
    pub fn new(config: &AdminConfig) -> Result<Self, String> {
        let tokens = TokenStore::new(&config.token_file);
        let gateway_config = GatewayConfig {
            base_url: config.base_url.clone(),
            timeout: config.timeout,
        };
        let gateway = HttpGateway::new(gateway_config, Arc::new(tokens.clone()))
            .map_err(|e| e.to_string())?;
        info!(base_url = gateway.base_url(), "Gateway ready");
        let mut system = Self::with_gateway(Arc::new(gateway), tokens, config.board_buffer);
        system.images = config.image_host.clone().map(ImageClient::new);
        Ok(system)
    }

    /// Wires the clients over any gateway, e.g. a mock in tests.
    pub fn with_gateway(gateway: Arc<dyn Gateway>, tokens: TokenStore, board_buffer: usize) -> Self {
        Self {
            session: SessionClient::new(gateway.clone(), tokens),
            products: ProductClient::new(ResourceClient::new(gateway.clone())),
            orders: OrderClient::new(ResourceClient::new(gateway)),
            images: None,
            board: None,
            board_buffer,
            handles: Vec::new(),
        }
    }

    pub fn require_session(&self) -> Result<(), SessionError> {
        self.session.require_session()
    }

    /// Starts the order board on first use and returns a handle to it.
    ///
    /// The board issues its mount Load immediately.
    pub fn open_order_board(&mut self) -> BoardClient {
        if let Some(board) = &self.board {
            return board.clone();
        }
        let (board, client) = OrderBoard::new(self.board_buffer);
        self.handles.push(tokio::spawn(board.run(self.orders.clone())));
        debug!(buffer = self.board_buffer, "Order board spawned");
        self.board = Some(client.clone());
        client
    }

    /// Drops the board handle and waits for the task to finish.
    ///
    /// Handles cloned out of [`open_order_board`](Self::open_order_board)
    /// must be dropped first, or this waits for them.
    pub async fn shutdown(self) -> Result<(), String> {
        drop(self.board);
        for handle in self.handles {
            handle
                .await
                .map_err(|e| format!("Order board task failed: {e}"))?;
        }
        info!("Admin system shut down");
        Ok(())
    }
}
