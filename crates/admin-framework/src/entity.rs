//! # ApiResource Trait
//!
//! The `ApiResource` trait defines the contract that every backend resource
//! (Order, Product, …) implements to be served by the generic
//! [`ResourceClient`](crate::ResourceClient). It names the collection path,
//! the JSON envelope keys the backend wraps its payloads in, and the payload
//! types for creation and updates.
//!
//! # Architecture Note
//! Writing the list/get/create/update/delete plumbing once against this trait
//! means a new resource only declares *where* it lives and *what* its payloads
//! look like. Associated types keep payloads from crossing resources: a
//! `ProductDraft` can't be posted to the orders collection.
//!
//! Resources that the admin client never creates or updates use
//! [`Unsupported`] for those payloads, which makes the call impossible to
//! write rather than a runtime failure.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Payload type for operations a resource does not support.
///
/// The enum has no variants, so no value of it can exist.
#[derive(Debug, Clone, Serialize)]
pub enum Unsupported {}

/// Trait that any backend resource must implement to be served by `ResourceClient`.
pub trait ApiResource: Clone + Debug + DeserializeOwned + Send + Sync + 'static {
    /// The backend identifier. Its `Display` form is used in member paths.
    type Id: Clone + Send + Sync + Display + Debug;

    /// Body sent with `POST` on the collection.
    type Create: Serialize + Send + Sync + Debug;

    /// Body sent with `PUT` on a member.
    type Update: Serialize + Send + Sync + Debug;

    /// Collection path relative to the base URL, e.g. `/admin/orders`.
    const COLLECTION: &'static str;

    /// Envelope key of list responses: `{"orders": [...]}`.
    const LIST_KEY: &'static str;

    /// Envelope key of single-item responses: `{"product": {...}}`.
    const ITEM_KEY: &'static str;

    /// Path of one member of the collection.
    fn member_path(id: &Self::Id) -> String {
        format!("{}/{}", Self::COLLECTION, id)
    }
}
