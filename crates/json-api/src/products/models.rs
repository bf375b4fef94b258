//! Product response body

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use storefront::products::Product;

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// Product identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Price in whole currency units
    pub price: u64,

    /// Image URL
    pub image: String,

    /// Long description
    pub description: String,

    /// Category name
    pub category: String,

    /// Average rating out of 5
    pub rating: f64,

    /// Number of reviews
    pub reviews: u32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            description: product.description,
            category: product.category,
            rating: product.rating,
            reviews: product.reviews,
        }
    }
}

impl From<ProductResponse> for Product {
    fn from(product: ProductResponse) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            description: product.description,
            category: product.category,
            rating: product.rating,
            reviews: product.reviews,
        }
    }
}
