//! # Shop Admin
//!
//! Admin console for the shop's REST backend.
//!
//! ## Core Components
//!
//! - **[order_board]**: The one stateful piece. Loads all orders, groups them by
//!   lifecycle stage and forwards status transitions, refetching after each.
//! - **[model]**: Wire-format records ([`Order`](model::Order), [`Product`](model::Product)).
//! - **[clients]**: Typed wrappers over the framework's `ResourceClient`.
//! - **[render]**: Pure view model and plain-text output for the board.
//! - **[lifecycle]**: Wires the gateway, the clients and the board task.
//! - **[cli]**: The `shop-admin` command line.
//!
//! ## Testing
//!
//! See [`admin_framework::mock`] for the in-memory gateway used by the tests.

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod order_board;
pub mod render;
