//! # Request Messages
//!
//! This module defines the request value handed to a [`Gateway`](crate::Gateway).
//! Every typed client call is lowered into one [`ApiRequest`] before it leaves
//! the process, which is also what the mock gateway records for assertions.

use serde_json::Value;
use std::fmt::{Display, Formatter};

/// HTTP verbs the admin backend understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One verb-shaped call against the backend.
///
/// # The CRUD Pattern
/// Resource clients map their operations onto verbs the same way for every
/// resource:
///
/// - **List / Get**: `GET` on the collection or member path.
/// - **Create**: `POST` on the collection path with a JSON body.
/// - **Update**: `PUT` on the member path with a JSON body.
/// - **Delete**: `DELETE` on the member path.
/// - **Action**: `PATCH` on a sub-path of the member (e.g. `/status`).
///
/// `path` is always relative to the gateway's base URL and starts with `/`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method,
            path: path.into(),
            body,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path, None)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Post, path, Some(body))
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Put, path, Some(body))
    }

    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Patch, path, Some(body))
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path, None)
    }
}

impl Display for ApiRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
