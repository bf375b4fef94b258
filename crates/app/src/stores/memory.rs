//! In-memory store.

use async_trait::async_trait;
use storefront::{
    cart::{CartItemUuid, CartLineItem, NewCartLineItem, merge_line_item},
    fixtures::{self, FixtureError},
    products::{Catalog, Product},
};
use tokio::sync::{Mutex, RwLock};

use super::{Backend, Store, StoreError};

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    catalog: RwLock<Catalog>,
    cart: Mutex<Vec<CartLineItem>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            cart: Mutex::new(Vec::new()),
        }
    }

    /// Store holding the bundled sample catalog and an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled catalog fails to parse.
    pub fn seeded() -> Result<Self, FixtureError> {
        Ok(Self::new(fixtures::catalog()?))
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend(&self) -> Backend {
        Backend::Memory
    }

    async fn check_health(&self) -> Backend {
        Backend::Memory
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.catalog.read().await.products().to_vec())
    }

    async fn find_product(&self, id: &str) -> Result<Option<Product>, StoreError> {
        Ok(self.catalog.read().await.get(id).cloned())
    }

    async fn replace_products(&self, products: Vec<Product>) -> Result<(), StoreError> {
        let catalog = Catalog::new(products)?;

        *self.catalog.write().await = catalog;

        Ok(())
    }

    async fn list_cart_items(&self) -> Result<Vec<CartLineItem>, StoreError> {
        Ok(self.cart.lock().await.clone())
    }

    async fn add_cart_item(&self, item: NewCartLineItem) -> Result<CartLineItem, StoreError> {
        let mut cart = self.cart.lock().await;

        Ok(merge_line_item(&mut cart, item)?)
    }

    async fn set_cart_item_quantity(
        &self,
        id: CartItemUuid,
        quantity: u32,
    ) -> Result<Option<CartLineItem>, StoreError> {
        let mut cart = self.cart.lock().await;

        Ok(cart.iter_mut().find(|item| item.id == id).map(|item| {
            item.quantity = quantity;
            item.clone()
        }))
    }

    async fn delete_cart_item(&self, id: CartItemUuid) -> Result<bool, StoreError> {
        let mut cart = self.cart.lock().await;
        let before = cart.len();

        cart.retain(|item| item.id != id);

        Ok(cart.len() != before)
    }

    async fn clear_cart(&self) -> Result<u64, StoreError> {
        let mut cart = self.cart.lock().await;
        let removed = cart.len();

        cart.clear();

        Ok(u64::try_from(removed)?)
    }
}

#[cfg(test)]
mod tests {
    use storefront::cart::{MAX_QUANTITY, QuantityError};
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn seeded_store_lists_sample_catalog() -> TestResult {
        let store = MemoryStore::seeded()?;

        let products = store.list_products().await?;

        assert_eq!(products.len(), 8);
        assert_eq!(products.first().map(|p| p.id.as_str()), Some("1"));

        Ok(())
    }

    #[tokio::test]
    async fn find_product_misses_unknown_ids() -> TestResult {
        let store = MemoryStore::seeded()?;

        assert!(store.find_product("999").await?.is_none());
        assert!(store.find_product("3").await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn adding_same_product_twice_merges_rows() -> TestResult {
        let store = MemoryStore::seeded()?;

        let first = store.add_cart_item(NewCartLineItem::new("1", 1)).await?;
        let second = store.add_cart_item(NewCartLineItem::new("1", 2)).await?;

        assert_eq!(first.id, second.id);
        assert_eq!(second.quantity, 3);
        assert_eq!(store.list_cart_items().await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn merging_past_max_quantity_is_a_quantity_error() -> TestResult {
        let store = MemoryStore::seeded()?;

        store
            .add_cart_item(NewCartLineItem::new("1", MAX_QUANTITY))
            .await?;

        let result = store.add_cart_item(NewCartLineItem::new("1", 1)).await;

        assert!(
            matches!(result, Err(StoreError::Quantity(QuantityError::TooLarge))),
            "expected a quantity error, got {result:?}"
        );
        assert_eq!(
            store
                .list_cart_items()
                .await?
                .first()
                .map(|item| item.quantity),
            Some(MAX_QUANTITY)
        );

        Ok(())
    }

    #[tokio::test]
    async fn set_quantity_on_missing_item_returns_none() -> TestResult {
        let store = MemoryStore::seeded()?;

        let updated = store
            .set_cart_item_quantity(CartItemUuid::new(), 4)
            .await?;

        assert!(updated.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn set_quantity_overwrites() -> TestResult {
        let store = MemoryStore::seeded()?;
        let item = store.add_cart_item(NewCartLineItem::new("2", 5)).await?;

        let updated = store.set_cart_item_quantity(item.id, 1).await?;

        assert_eq!(updated.map(|item| item.quantity), Some(1));

        Ok(())
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_went() -> TestResult {
        let store = MemoryStore::seeded()?;
        let item = store.add_cart_item(NewCartLineItem::new("2", 1)).await?;

        assert!(store.delete_cart_item(item.id).await?);
        assert!(!store.delete_cart_item(item.id).await?);

        Ok(())
    }

    #[tokio::test]
    async fn clear_cart_counts_removed_rows() -> TestResult {
        let store = MemoryStore::seeded()?;

        store.add_cart_item(NewCartLineItem::new("1", 1)).await?;
        store.add_cart_item(NewCartLineItem::new("2", 1)).await?;

        assert_eq!(store.clear_cart().await?, 2);
        assert!(store.list_cart_items().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn replace_products_rejects_duplicates() -> TestResult {
        let store = MemoryStore::seeded()?;
        let mut products = store.list_products().await?;

        products.extend(products.clone());

        let result = store.replace_products(products).await;

        assert!(matches!(result, Err(StoreError::Catalog(_))));
        assert_eq!(store.list_products().await?.len(), 8);

        Ok(())
    }
}
