//! # Admin Framework
//!
//! This crate provides the building blocks for type-safe clients of a
//! JSON-over-HTTP admin backend. It follows a **Resource-Oriented** layout:
//! every backend resource is a collection path with uniform verbs, and one
//! generic client serves all of them.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Resource Layer** ([`ApiResource`]) - where a resource lives and what its payloads are
//! 2. **Interface Layer** ([`ResourceClient`], [`ResourceApi`]) - typed calls and JSON envelopes
//! 3. **Transport Layer** ([`Gateway`]) - verb-shaped requests with the bearer credential
//!
//! ```text
//!  OrderClient ──► ResourceClient<Order> ──► Arc<dyn Gateway> ──► HttpGateway ──► backend
//!                                                           └──► MockGateway (tests)
//! ```
//!
//! ## Credential Injection
//!
//! The gateway receives a [`CredentialProvider`] at construction and asks it
//! for the token on *every* request. A login that writes a new token to the
//! [`TokenStore`] is visible to the next call without rebuilding anything.
//!
//! ```rust,no_run
//! use admin_framework::{GatewayConfig, HttpGateway, TokenStore};
//! use std::sync::Arc;
//!
//! let tokens = TokenStore::new("/tmp/shop-admin/token");
//! let gateway = HttpGateway::new(
//!     GatewayConfig::new("http://localhost:4000"),
//!     Arc::new(tokens.clone()),
//! )
//! .expect("valid base url");
//! ```
//!
//! ## Error Handling
//!
//! Every transport, status and decode failure is a [`GatewayError`]. Resource
//! clients map it into their own error enum through [`ResourceApi::map_error`].
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockGateway` with a fluent expectation API,
//! so clients and components can be tested without a running backend.

pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod gateway;
pub mod http;
pub mod message;
pub mod mock;
pub mod session;
pub mod tracing;

// Re-export core types for convenience
pub use client::{decode_field, ResourceClient};
pub use client_trait::ResourceApi;
pub use entity::{ApiResource, Unsupported};
pub use error::GatewayError;
pub use gateway::Gateway;
pub use http::{GatewayConfig, HttpGateway};
pub use message::{ApiRequest, Method};
pub use session::{CredentialProvider, StaticToken, TokenStore};
