//! # Gateway Trait
//!
//! The seam between typed clients and the wire. Production code uses
//! [`HttpGateway`](crate::HttpGateway); tests use the in-memory
//! [`MockGateway`](crate::mock::MockGateway). One gateway instance is shared
//! (behind an `Arc`) by every client in the process.

use crate::error::GatewayError;
use crate::message::ApiRequest;
use async_trait::async_trait;
use serde_json::Value;

/// Verb-shaped JSON calls against the admin backend.
///
/// Implementors only provide [`Gateway::send`]; the verb helpers are built on it.
/// A successful response with an empty body decodes to `Value::Null`.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Sends one request and returns the decoded JSON body.
    async fn send(&self, request: ApiRequest) -> Result<Value, GatewayError>;

    async fn get(&self, path: &str) -> Result<Value, GatewayError> {
        self.send(ApiRequest::get(path)).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, GatewayError> {
        self.send(ApiRequest::post(path, body)).await
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value, GatewayError> {
        self.send(ApiRequest::put(path, body)).await
    }

    async fn patch(&self, path: &str, body: Value) -> Result<Value, GatewayError> {
        self.send(ApiRequest::patch(path, body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value, GatewayError> {
        self.send(ApiRequest::delete(path)).await
    }
}
