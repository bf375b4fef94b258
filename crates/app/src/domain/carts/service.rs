//! Carts service.

use std::{str::FromStr, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use storefront::{
    cart::{CartItemUuid, CartLineItem, NewCartLineItem, parse_quantity},
    pricing::{CartView, price_cart},
};
use tracing::debug;

use crate::{
    domain::carts::{data::NewCartItem, errors::CartsServiceError},
    stores::{Store, load_catalog},
};

#[derive(Clone)]
pub struct StoreCartsService {
    store: Arc<dyn Store>,
}

impl StoreCartsService {
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CartsService for StoreCartsService {
    async fn get_cart(&self) -> Result<CartView, CartsServiceError> {
        let items = self.store.list_cart_items().await?;
        let catalog = load_catalog(self.store.as_ref()).await?;

        Ok(price_cart(items, &catalog))
    }

    async fn add_item(&self, item: NewCartItem) -> Result<CartLineItem, CartsServiceError> {
        if item.product_id.is_empty() {
            return Err(CartsServiceError::MissingProductId);
        }

        let quantity = parse_quantity(item.quantity)?;

        if self.store.find_product(&item.product_id).await?.is_none() {
            return Err(CartsServiceError::ProductNotFound);
        }

        let line_item = self
            .store
            .add_cart_item(NewCartLineItem::new(item.product_id, quantity))
            .await?;

        debug!(
            item = %line_item.id,
            product = %line_item.product_id,
            quantity = line_item.quantity,
            "added to cart"
        );

        Ok(line_item)
    }

    async fn update_quantity(
        &self,
        item: &str,
        quantity: i64,
    ) -> Result<CartLineItem, CartsServiceError> {
        let quantity = parse_quantity(quantity)?;

        let Ok(id) = CartItemUuid::from_str(item) else {
            return Err(CartsServiceError::ItemNotFound);
        };

        self.store
            .set_cart_item_quantity(id, quantity)
            .await?
            .ok_or(CartsServiceError::ItemNotFound)
    }

    async fn remove_item(&self, item: &str) -> Result<(), CartsServiceError> {
        // Removing an unknown line item is not an error.
        let Ok(id) = CartItemUuid::from_str(item) else {
            return Ok(());
        };

        let removed = self.store.delete_cart_item(id).await?;

        debug!(item, removed, "removed from cart");

        Ok(())
    }

    async fn clear(&self) -> Result<u64, CartsServiceError> {
        Ok(self.store.clear_cart().await?)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// The cart with every line item priced against the catalog.
    async fn get_cart(&self) -> Result<CartView, CartsServiceError>;

    /// Add a product, merging with the existing line item for it. Returns the resulting row.
    async fn add_item(&self, item: NewCartItem) -> Result<CartLineItem, CartsServiceError>;

    /// Set a line item's quantity.
    async fn update_quantity(
        &self,
        item: &str,
        quantity: i64,
    ) -> Result<CartLineItem, CartsServiceError>;

    /// Remove a line item. Unknown ids succeed without effect.
    async fn remove_item(&self, item: &str) -> Result<(), CartsServiceError>;

    /// Remove every line item, returning how many were removed.
    async fn clear(&self) -> Result<u64, CartsServiceError>;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use storefront::{
        cart::{MAX_QUANTITY, QuantityError},
        products::Product,
    };
    use testresult::TestResult;

    use crate::{
        domain::ErrorKind,
        stores::{MockStore, StoreError},
        test::TestContext,
    };

    use super::*;

    #[tokio::test]
    async fn empty_cart_has_zero_total() -> TestResult {
        let ctx = TestContext::new()?;

        let cart = ctx.carts.get_cart().await?;

        assert!(cart.is_empty());
        assert_eq!(cart.total, 0);

        Ok(())
    }

    #[tokio::test]
    async fn cart_is_priced_from_catalog() -> TestResult {
        let ctx = TestContext::new()?;

        ctx.carts.add_item(NewCartItem::new("1", 2)).await?;

        let cart = ctx.carts.get_cart().await?;
        let item = cart.items.first().ok_or("cart should have one item")?;

        assert_eq!(item.subtotal, 16598);
        assert_eq!(item.product.as_ref().map(|p| p.name.as_str()), Some("Wireless Headphones"));
        assert_eq!(cart.total, 16598);

        Ok(())
    }

    #[tokio::test]
    async fn adding_an_existing_product_increments_quantity() -> TestResult {
        let ctx = TestContext::new()?;

        let first = ctx.carts.add_item(NewCartItem::new("3", 1)).await?;
        let second = ctx.carts.add_item(NewCartItem::new("3", 4)).await?;

        assert_eq!(first.id, second.id);
        assert_eq!(second.quantity, 5);
        assert_eq!(ctx.carts.get_cart().await?.items.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn add_item_requires_product_id() -> TestResult {
        let ctx = TestContext::new()?;

        let error = ctx
            .carts
            .add_item(NewCartItem::new("", 1))
            .await
            .err()
            .ok_or("expected an error")?;

        assert!(matches!(error, CartsServiceError::MissingProductId));
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);

        Ok(())
    }

    #[tokio::test]
    async fn add_item_rejects_unknown_products() -> TestResult {
        let ctx = TestContext::new()?;

        let result = ctx.carts.add_item(NewCartItem::new("999", 1)).await;

        assert!(matches!(result, Err(CartsServiceError::ProductNotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn add_item_rejects_non_positive_quantities() -> TestResult {
        let ctx = TestContext::new()?;

        let result = ctx.carts.add_item(NewCartItem::new("1", 0)).await;

        assert!(matches!(
            result,
            Err(CartsServiceError::InvalidQuantity(QuantityError::TooSmall))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn update_quantity_overwrites() -> TestResult {
        let ctx = TestContext::new()?;
        let item = ctx.carts.add_item(NewCartItem::new("2", 1)).await?;

        let updated = ctx
            .carts
            .update_quantity(&item.id.to_string(), 6)
            .await?;

        assert_eq!(updated.quantity, 6);

        Ok(())
    }

    #[tokio::test]
    async fn update_quantity_validates_before_lookup() -> TestResult {
        let ctx = TestContext::new()?;

        let result = ctx.carts.update_quantity("not-a-uuid", 0).await;

        assert!(matches!(result, Err(CartsServiceError::InvalidQuantity(_))));

        Ok(())
    }

    #[tokio::test]
    async fn update_quantity_on_unknown_item_is_not_found() -> TestResult {
        let ctx = TestContext::new()?;

        let malformed = ctx.carts.update_quantity("not-a-uuid", 2).await;
        let missing = ctx
            .carts
            .update_quantity(&CartItemUuid::new().to_string(), 2)
            .await;

        assert!(matches!(malformed, Err(CartsServiceError::ItemNotFound)));
        assert!(matches!(missing, Err(CartsServiceError::ItemNotFound)));

        Ok(())
    }

    #[tokio::test]
    async fn remove_item_is_idempotent() -> TestResult {
        let ctx = TestContext::new()?;
        let item = ctx.carts.add_item(NewCartItem::new("2", 1)).await?;
        let id = item.id.to_string();

        ctx.carts.remove_item(&id).await?;
        ctx.carts.remove_item(&id).await?;
        ctx.carts.remove_item("not-a-uuid").await?;

        assert!(ctx.carts.get_cart().await?.is_empty());

        Ok(())
    }

    async fn seeded_with_two_items(ctx: &TestContext) -> TestResult {
        ctx.carts.add_item(NewCartItem::new("1", 2)).await?;
        ctx.carts.add_item(NewCartItem::new("3", 1)).await?;

        Ok(())
    }

    #[tokio::test]
    async fn failed_adds_leave_the_cart_unchanged() -> TestResult {
        let ctx = TestContext::new()?;
        seeded_with_two_items(&ctx).await?;

        let before = ctx.carts.get_cart().await?;

        for attempt in [
            NewCartItem::new("999", 1),
            NewCartItem::new("", 1),
            NewCartItem::new("3", 0),
            NewCartItem::new("3", i64::from(MAX_QUANTITY)),
        ] {
            let result = ctx.carts.add_item(attempt).await;

            assert!(result.is_err(), "expected the add to fail");
        }

        assert_eq!(ctx.carts.get_cart().await?, before);
        assert_eq!(before.items.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn merging_past_max_quantity_is_an_invalid_argument() -> TestResult {
        let ctx = TestContext::new()?;

        ctx.carts
            .add_item(NewCartItem::new("1", i64::from(MAX_QUANTITY)))
            .await?;

        let error = ctx
            .carts
            .add_item(NewCartItem::new("1", 1))
            .await
            .err()
            .ok_or("expected an error")?;

        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert_eq!(error.to_string(), "Quantity is too large");

        Ok(())
    }

    #[tokio::test]
    async fn removing_unknown_ids_leaves_the_cart_unchanged() -> TestResult {
        let ctx = TestContext::new()?;
        seeded_with_two_items(&ctx).await?;

        let before = ctx.carts.get_cart().await?;

        ctx.carts
            .remove_item(&CartItemUuid::new().to_string())
            .await?;
        ctx.carts.remove_item("not-a-uuid").await?;

        assert_eq!(ctx.carts.get_cart().await?, before);
        assert_eq!(before.items.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn removed_products_stay_listed_with_zero_subtotal() -> TestResult {
        let ctx = TestContext::new()?;

        ctx.carts.add_item(NewCartItem::new("1", 1)).await?;
        ctx.carts.add_item(NewCartItem::new("2", 1)).await?;

        let remaining: Vec<Product> = ctx
            .store
            .list_products()
            .await?
            .into_iter()
            .filter(|product| product.id != "1")
            .collect();

        ctx.store.replace_products(remaining).await?;

        let cart = ctx.carts.get_cart().await?;

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total, 1999);

        Ok(())
    }

    #[tokio::test]
    async fn store_outages_surface_as_unavailable() -> TestResult {
        let mut store = MockStore::new();

        store.expect_list_cart_items().returning(|| {
            Err(StoreError::Unavailable(sqlx::Error::PoolTimedOut))
        });

        let service = StoreCartsService::new(Arc::new(store));

        let error = service.get_cart().await.err().ok_or("expected an error")?;

        assert_eq!(error.kind(), ErrorKind::Unavailable);

        Ok(())
    }
}
