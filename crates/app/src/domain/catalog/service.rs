//! Catalog service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use storefront::products::{Product, ProductFilter};

use crate::{
    domain::catalog::errors::CatalogServiceError,
    stores::{Store, load_catalog},
};

#[derive(Clone)]
pub struct StoreCatalogService {
    store: Arc<dyn Store>,
}

impl StoreCatalogService {
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CatalogService for StoreCatalogService {
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, CatalogServiceError> {
        let catalog = load_catalog(self.store.as_ref()).await?;

        Ok(catalog.filter(&filter).into_iter().cloned().collect())
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogServiceError> {
        let catalog = load_catalog(self.store.as_ref()).await?;

        Ok(catalog.categories())
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Products matching the filter, in catalog order.
    async fn list_products(
        &self,
        filter: ProductFilter,
    ) -> Result<Vec<Product>, CatalogServiceError>;

    /// Distinct categories in order of first appearance.
    async fn categories(&self) -> Result<Vec<String>, CatalogServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn unfiltered_listing_returns_whole_catalog() -> TestResult {
        let ctx = TestContext::new()?;

        let products = ctx.catalog.list_products(ProductFilter::default()).await?;

        assert_eq!(products.len(), 8);

        Ok(())
    }

    #[tokio::test]
    async fn search_and_category_narrow_results() -> TestResult {
        let ctx = TestContext::new()?;

        let products = ctx
            .catalog
            .list_products(ProductFilter {
                search: Some("WIRELESS".to_string()),
                category: Some("Audio".to_string()),
            })
            .await?;

        assert!(!products.is_empty(), "expected wireless audio products");
        assert!(products.iter().all(|product| product.category == "Audio"));

        Ok(())
    }

    #[tokio::test]
    async fn all_category_matches_everything() -> TestResult {
        let ctx = TestContext::new()?;

        let products = ctx
            .catalog
            .list_products(ProductFilter {
                search: None,
                category: Some("All".to_string()),
            })
            .await?;

        assert_eq!(products.len(), 8);

        Ok(())
    }

    #[tokio::test]
    async fn categories_are_listed_in_catalog_order() -> TestResult {
        let ctx = TestContext::new()?;

        assert_eq!(ctx.catalog.categories().await?, ["Audio", "Accessories"]);

        Ok(())
    }
}
