//! Products

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category value that matches every product.
pub const ALL_CATEGORIES: &str = "All";

/// Product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Price in the smallest display unit of the catalog currency
    pub price: u64,

    /// Image URI
    pub image: String,

    /// Long-form description
    pub description: String,

    /// Category name
    pub category: String,

    /// Average rating, 0.0 to 5.0
    pub rating: f64,

    /// Number of reviews
    pub reviews: u32,
}

/// Errors raised while assembling a catalog.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// Two products share an identifier.
    #[error("duplicate product id: {0}")]
    DuplicateProductId(String),
}

/// Product search criteria.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive text matched against name and description
    pub search: Option<String>,

    /// Exact category; `None`, empty or [`ALL_CATEGORIES`] match everything
    pub category: Option<String>,
}

impl ProductFilter {
    /// Whether the given product satisfies both the search and category criteria.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product) && self.matches_category(product)
    }

    fn matches_search(&self, product: &Product) -> bool {
        let Some(search) = self.search.as_deref().map(str::trim) else {
            return true;
        };

        if search.is_empty() {
            return true;
        }

        let needle = search.to_lowercase();

        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }

    fn matches_category(&self, product: &Product) -> bool {
        match self.category.as_deref() {
            None | Some("" | ALL_CATEGORIES) => true,
            Some(category) => product.category == category,
        }
    }
}

/// An ordered, id-indexed set of products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProductId`] if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateProductId(product.id.clone()));
            }
        }

        Ok(Self { products, index })
    }

    /// Look up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.index
            .get(id)
            .and_then(|position| self.products.get(*position))
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Consume the catalog, returning its products in order.
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    /// Products matching the filter, in catalog order.
    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| filter.matches(product))
            .collect()
    }

    /// Distinct, non-empty categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();

        self.products
            .iter()
            .filter(|product| !product.category.is_empty())
            .filter(|product| seen.insert(product.category.as_str()))
            .map(|product| product.category.clone())
            .collect()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
