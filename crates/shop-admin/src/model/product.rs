/// Represents a product in the catalog.
///
/// # Resource
/// This struct implements [`ApiResource`](admin_framework::ApiResource),
/// allowing it to be served by a [`ResourceClient`](admin_framework::ResourceClient).
///
/// - Creation and update payload: [`ProductDraft`]
/// - Snapshot embedded in order lines: [`ProductSnapshot`]
use admin_framework::ApiResource;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub original_price: f64,
    pub sale_price: f64,
    #[serde(default)]
    pub on_sale_flag: bool,
}

/// Read-only copy of a product embedded in an order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    pub code: String,
    pub sale_price: f64,
    pub original_price: f64,
}

/// Payload for creating or replacing a product.
///
/// `image_url` points at an image that is already hosted; uploading the
/// file itself is not part of this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub original_price: f64,
    #[serde(default)]
    pub sale_price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ProductDraft {
    /// Code, name and a positive original price are mandatory.
    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty()
            || self.name.trim().is_empty()
            || !(self.original_price > 0.0)
        {
            return Err("Code, Name and Original Price are required.".to_string());
        }
        if self.sale_price < 0.0 {
            return Err("Sale Price cannot be negative.".to_string());
        }
        Ok(())
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            code: product.code.clone(),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            original_price: product.original_price,
            sale_price: product.sale_price,
            image_url: product.image.clone(),
        }
    }
}

impl ApiResource for Product {
    type Id = ProductId;
    type Create = ProductDraft;
    type Update = ProductDraft;

    const COLLECTION: &'static str = "/admin/products";
    const LIST_KEY: &'static str = "products";
    const ITEM_KEY: &'static str = "product";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft() -> ProductDraft {
        ProductDraft {
            code: "RB-01".to_string(),
            name: "Rye Bread".to_string(),
            description: String::new(),
            original_price: 29.75,
            sale_price: 25.0,
            image_url: None,
        }
    }

    #[test]
    fn test_draft_validation() {
        assert!(draft().validate().is_ok());

        let mut missing_code = draft();
        missing_code.code = "  ".to_string();
        assert!(missing_code.validate().is_err());

        let mut zero_price = draft();
        zero_price.original_price = 0.0;
        assert_eq!(
            zero_price.validate(),
            Err("Code, Name and Original Price are required.".to_string())
        );

        let mut nan_price = draft();
        nan_price.original_price = f64::NAN;
        assert!(nan_price.validate().is_err());
    }

    #[test]
    fn test_draft_wire_shape() {
        let body = serde_json::to_value(draft()).unwrap();
        assert_eq!(
            body,
            json!({
                "code": "RB-01",
                "name": "Rye Bread",
                "description": "",
                "originalPrice": 29.75,
                "salePrice": 25.0,
                "imageUrl": null
            })
        );
    }

    #[test]
    fn test_product_optional_fields_default() {
        let product: Product = serde_json::from_value(json!({
            "id": 2,
            "code": "MK-2",
            "name": "Milk",
            "originalPrice": 12.0,
            "salePrice": 10.0
        }))
        .unwrap();
        assert_eq!(product.image, None);
        assert!(!product.on_sale_flag);

        let back = ProductDraft::from(&product);
        assert_eq!(back.description, "");
        assert_eq!(back.original_price, 12.0);
    }
}
