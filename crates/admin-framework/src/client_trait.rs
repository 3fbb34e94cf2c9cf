//! # ResourceApi Trait
//!
//! Provides a common interface for resource‑specific clients, adding default
//! `list`, `get` and `delete` methods built on top of a generic
//! [`ResourceClient`].
use crate::{ApiResource, GatewayError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read/delete operations.
///
/// # Example
///
/// ```rust
/// use admin_framework::{ApiResource, GatewayError, ResourceApi, ResourceClient, Unsupported};
/// use serde::Deserialize;
///
/// #[derive(Clone, Debug, Deserialize)]
/// struct Coupon { id: u32, code: String }
///
/// impl ApiResource for Coupon {
///     type Id = u32;
///     type Create = Unsupported;
///     type Update = Unsupported;
///     const COLLECTION: &'static str = "/admin/coupons";
///     const LIST_KEY: &'static str = "coupons";
///     const ITEM_KEY: &'static str = "coupon";
/// }
///
/// #[derive(Debug)]
/// struct CouponError(String);
/// impl From<String> for CouponError {
///     fn from(s: String) -> Self { CouponError(s) }
/// }
///
/// struct CouponClient { inner: ResourceClient<Coupon> }
///
/// impl ResourceApi<Coupon> for CouponClient {
///     type Error = CouponError;
///     fn inner(&self) -> &ResourceClient<Coupon> { &self.inner }
///     fn map_error(e: GatewayError) -> Self::Error { CouponError(e.to_string()) }
/// }
///
/// async fn usage(client: CouponClient) {
///     // list(), get() and delete() are provided automatically!
///     let _ = client.list().await;
///     let _ = client.get(1).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ResourceApi<T: ApiResource>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map gateway errors to the specific resource error type.
    fn map_error(e: GatewayError) -> Self::Error;

    /// Fetch the whole collection.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
