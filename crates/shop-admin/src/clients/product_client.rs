//! # Product Client
//!
//! Provides a high‑level API for the `/admin/products` resource.
//! It wraps a `ResourceClient<Product>` and validates drafts before they
//! leave the process.
use crate::error::ProductError;
use crate::model::{Product, ProductDraft, ProductId};
use admin_framework::{GatewayError, ResourceApi, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Client for the product endpoints.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ResourceApi<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: GatewayError) -> Self::Error {
        ProductError::ApiCommunicationError(e.to_string())
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.list().await?;
        debug!(count = products.len(), "Products fetched");
        Ok(products)
    }

    /// Fetch one product; an unknown id is [`ProductError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id).await?.ok_or(ProductError::NotFound(id))
    }

    /// Validates `draft`, then `POST`s it.
    ///
    /// Returns the created product when the backend echoes it back.
    #[instrument(skip(self, draft), fields(code = %draft.code))]
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Option<Product>, ProductError> {
        if let Err(reason) = draft.validate() {
            warn!(%reason, "Draft rejected before sending");
            return Err(ProductError::ValidationError(reason));
        }
        let created = self.inner.create(draft).await.map_err(Self::map_error)?;
        info!("Product created");
        Ok(created)
    }

    /// Validates `draft`, then `PUT`s it over product `id`.
    #[instrument(skip(self, draft), fields(code = %draft.code))]
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Option<Product>, ProductError> {
        if let Err(reason) = draft.validate() {
            warn!(%reason, "Draft rejected before sending");
            return Err(ProductError::ValidationError(reason));
        }
        match self.inner.update(id, draft).await {
            Ok(updated) => {
                info!("Product updated");
                Ok(updated)
            }
            Err(e) if e.is_not_found() => Err(ProductError::NotFound(id)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Deletes product `id` and returns the reloaded list.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<Vec<Product>, ProductError> {
        match self.inner.delete(id).await {
            Ok(()) => info!("Product deleted"),
            Err(e) if e.is_not_found() => return Err(ProductError::NotFound(id)),
            Err(e) => return Err(Self::map_error(e)),
        }
        self.list_products().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_framework::mock::MockGateway;
    use serde_json::json;

    fn product_json(id: u64, code: &str) -> serde_json::Value {
        json!({
            "id": id,
            "code": code,
            "name": "Rye Bread",
            "originalPrice": 29.75,
            "salePrice": 25.0
        })
    }

    fn draft(code: &str) -> ProductDraft {
        ProductDraft {
            code: code.to_string(),
            name: "Rye Bread".to_string(),
            description: String::new(),
            original_price: 29.75,
            sale_price: 25.0,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_invalid_draft_is_never_sent() {
        let mock = MockGateway::new();
        let client = ProductClient::new(ResourceClient::new(mock.gateway()));

        let result = client.create_product(draft("")).await;

        assert_eq!(
            result,
            Err(ProductError::ValidationError(
                "Code, Name and Original Price are required.".to_string()
            ))
        );
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_product_posts_draft() {
        let mut mock = MockGateway::new();
        mock.expect_post("/admin/products")
            .return_ok(json!({ "product": product_json(5, "RB-01") }));
        let client = ProductClient::new(ResourceClient::new(mock.gateway()));

        let created = client.create_product(draft("RB-01")).await.unwrap();

        assert_eq!(created.map(|p| p.id), Some(ProductId(5)));
        assert_eq!(
            mock.requests()[0].body.as_ref().and_then(|b| b.get("code")),
            Some(&json!("RB-01"))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut mock = MockGateway::new();
        mock.expect_get("/admin/products/9")
            .return_err(GatewayError::Status {
                status: 404,
                message: "Product not found".to_string(),
            });
        let client = ProductClient::new(ResourceClient::new(mock.gateway()));

        assert_eq!(
            client.get_product(ProductId(9)).await,
            Err(ProductError::NotFound(ProductId(9)))
        );
    }

    #[tokio::test]
    async fn test_delete_reloads_list() {
        let mut mock = MockGateway::new();
        mock.expect_delete("/admin/products/5")
            .return_ok(json!({ "message": "deleted" }));
        mock.expect_get("/admin/products")
            .return_ok(json!({ "products": [product_json(6, "MK-2")] }));
        let client = ProductClient::new(ResourceClient::new(mock.gateway()));

        let remaining = client.delete_product(ProductId(5)).await.unwrap();

        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].code, "MK-2");
        mock.verify();
    }
}
