//! Storage backends for the catalog and the cart.
//!
//! Every backend implements [`Store`]. [`FallbackStore`] fronts a `PostgreSQL` store with an
//! in-memory one and is what the application wires up.

use std::fmt;

use async_trait::async_trait;
use mockall::automock;
use serde::Serialize;
use storefront::{
    cart::{CartItemUuid, CartLineItem, NewCartLineItem},
    products::{Catalog, Product},
};

mod errors;
mod fallback;
mod memory;
mod postgres;

pub use errors::StoreError;
pub use fallback::{DEFAULT_RECONNECT_INTERVAL, FallbackStore};
pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Which backend is currently serving requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Postgres,
    Memory,
}

impl Backend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[automock]
#[async_trait]
pub trait Store: Send + Sync {
    /// Backend serving requests right now.
    fn backend(&self) -> Backend;

    /// Check connectivity, switching backends if availability changed.
    async fn check_health(&self) -> Backend;

    /// All products in catalog order.
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    /// A single product by id.
    async fn find_product(&self, id: &str) -> Result<Option<Product>, StoreError>;

    /// Replace the whole catalog.
    async fn replace_products(&self, products: Vec<Product>) -> Result<(), StoreError>;

    /// All cart line items, oldest first.
    async fn list_cart_items(&self) -> Result<Vec<CartLineItem>, StoreError>;

    /// Add to the cart, merging with an existing row for the same product.
    async fn add_cart_item(&self, item: NewCartLineItem) -> Result<CartLineItem, StoreError>;

    /// Overwrite a line item's quantity. `None` when the line item does not exist.
    async fn set_cart_item_quantity(
        &self,
        id: CartItemUuid,
        quantity: u32,
    ) -> Result<Option<CartLineItem>, StoreError>;

    /// Delete a line item, returning whether a row was removed.
    async fn delete_cart_item(&self, id: CartItemUuid) -> Result<bool, StoreError>;

    /// Empty the cart, returning the number of rows removed.
    async fn clear_cart(&self) -> Result<u64, StoreError>;
}

/// Load the full catalog from a store.
///
/// # Errors
///
/// Returns an error if the store fails or holds duplicate product ids.
pub async fn load_catalog(store: &dyn Store) -> Result<Catalog, StoreError> {
    let products = store.list_products().await?;

    Ok(Catalog::new(products)?)
}
