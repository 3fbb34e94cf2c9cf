//! # Mock Gateway & Testing Guide
//!
//! The `MockGateway` implements the same [`Gateway`] seam as the production
//! HTTP gateway but answers entirely in memory. You queue expected requests
//! with canned responses, hand the gateway to the code under test, then
//! assert on what was actually sent.
//!
//! ## When to use the Mock vs a Real Backend
//!
//! | Feature | MockGateway | Real Backend |
//! |---------|-------------|--------------|
//! | **Speed** | Instant (in-memory) | Network round trips |
//! | **Determinism** | 100% Deterministic | Depends on server state |
//! | **Error Injection** | Easy (`return_err`) | Hard (needs a broken server) |
//! | **Stalls** | Easy (`hang`) | Needs a proxy |
//! | **Use Case** | Unit and component tests | Manual end-to-end checks |
//!
//! ## Example
//!
//! ```rust
//! use admin_framework::mock::MockGateway;
//! use admin_framework::{Gateway, GatewayError, Method};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     // 1. Setup expectations (answered in order)
//!     let mut mock = MockGateway::new();
//!     mock.expect_get("/admin/orders").return_ok(json!({ "orders": [] }));
//!     mock.expect_patch("/admin/orders/1/status")
//!         .return_err(GatewayError::Transport("connection refused".into()));
//!
//!     // 2. Hand the shared gateway to the code under test
//!     let gateway = mock.gateway();
//!     let listed = gateway.get("/admin/orders").await.unwrap();
//!     assert_eq!(listed, json!({ "orders": [] }));
//!     assert!(gateway.patch("/admin/orders/1/status", json!({})).await.is_err());
//!
//!     // 3. Assert on traffic
//!     let sent = mock.requests();
//!     assert_eq!(sent[1].method, Method::Patch);
//!     mock.verify();
//! }
//! ```
//!
//! A request that does not match the next queued expectation is answered
//! with [`GatewayError::Unexpected`] and recorded as a mismatch, which makes
//! [`MockGateway::verify`] fail. The mock never panics inside the code under
//! test, so a stray request can't take down a task that is being observed.

use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::message::{ApiRequest, Method};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Reply {
    Ready(Result<Value, GatewayError>),
    /// Never resolves, like a request to a host that accepted the connection
    /// and went silent.
    Hang,
}

struct Expectation {
    method: Method,
    path: String,
    reply: Reply,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    received: Vec<ApiRequest>,
    mismatches: Vec<String>,
}

/// A mock gateway with expectation tracking for fluent testing.
#[derive(Clone, Default)]
pub struct MockGateway {
    state: Arc<Mutex<MockState>>,
}

impl MockGateway {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the gateway for use in tests. All handles share one expectation queue.
    pub fn gateway(&self) -> Arc<dyn Gateway> {
        Arc::new(MockTransport {
            state: self.state.clone(),
        })
    }

    pub fn expect(&mut self, method: Method, path: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path: path.into(),
            state: self.state.clone(),
        }
    }

    pub fn expect_get(&mut self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::Get, path)
    }

    pub fn expect_post(&mut self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::Post, path)
    }

    pub fn expect_put(&mut self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::Put, path)
    }

    pub fn expect_patch(&mut self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::Patch, path)
    }

    pub fn expect_delete(&mut self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::Delete, path)
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().received.clone()
    }

    /// Number of expectations not consumed yet.
    pub fn pending(&self) -> usize {
        self.state.lock().unwrap().expectations.len()
    }

    /// Verifies that all expectations were met and nothing unexpected arrived.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.mismatches.is_empty() {
            panic!("Unexpected requests: {:?}", state.mismatches);
        }
        if !state.expectations.is_empty() {
            let remaining: Vec<String> = state
                .expectations
                .iter()
                .map(|e| format!("{} {}", e.method, e.path))
                .collect();
            panic!(
                "Not all expectations were met. {} remaining: {:?}",
                remaining.len(),
                remaining
            );
        }
    }
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder {
    method: Method,
    path: String,
    state: Arc<Mutex<MockState>>,
}

impl ExpectationBuilder {
    /// Sets the expectation to return a successful body.
    pub fn return_ok(self, body: Value) {
        self.push(Reply::Ready(Ok(body)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: GatewayError) {
        self.push(Reply::Ready(Err(error)));
    }

    /// Sets the expectation to never answer.
    pub fn hang(self) {
        self.push(Reply::Hang);
    }

    fn push(self, reply: Reply) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation {
            method: self.method,
            path: self.path,
            reply,
        });
    }
}

struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

#[async_trait]
impl Gateway for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, GatewayError> {
        let reply = {
            let mut state = self.state.lock().unwrap();
            state.received.push(request.clone());
            match state.expectations.pop_front() {
                Some(exp) if exp.method == request.method && exp.path == request.path => {
                    Ok(exp.reply)
                }
                Some(exp) => {
                    let mismatch =
                        format!("expected {} {}, got {}", exp.method, exp.path, request);
                    state.mismatches.push(mismatch.clone());
                    Err(mismatch)
                }
                None => {
                    let mismatch = format!("no expectation left for {request}");
                    state.mismatches.push(mismatch.clone());
                    Err(mismatch)
                }
            }
        }; // lock released before awaiting

        match reply {
            Ok(Reply::Ready(result)) => result,
            Ok(Reply::Hang) => std::future::pending().await,
            Err(mismatch) => Err(GatewayError::Unexpected(mismatch)),
        }
    }
}
