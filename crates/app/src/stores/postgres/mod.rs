//! `PostgreSQL` store.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{PgPool, Postgres, query, query_as};
use storefront::{
    cart::{CartItemUuid, CartLineItem, MAX_QUANTITY, NewCartLineItem, QuantityError},
    products::{Catalog, Product},
};

use super::{Backend, Store, StoreError};

mod records;

use records::{CartItemRecord, ProductRecord};

const PING_SQL: &str = include_str!("sql/ping.sql");
const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const FIND_PRODUCT_SQL: &str = include_str!("sql/find_product.sql");
const DELETE_PRODUCTS_SQL: &str = include_str!("sql/delete_products.sql");
const INSERT_PRODUCT_SQL: &str = include_str!("sql/insert_product.sql");
const LIST_CART_ITEMS_SQL: &str = include_str!("sql/list_cart_items.sql");
const ADD_CART_ITEM_SQL: &str = include_str!("sql/add_cart_item.sql");
const UPDATE_CART_ITEM_QUANTITY_SQL: &str = include_str!("sql/update_cart_item_quantity.sql");
const DELETE_CART_ITEM_SQL: &str = include_str!("sql/delete_cart_item.sql");
const CLEAR_CART_SQL: &str = include_str!("sql/clear_cart.sql");

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Round-trip a trivial query.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be reached.
    pub async fn ping(&self) -> Result<(), StoreError> {
        query(PING_SQL).execute(&self.pool).await?;

        Ok(())
    }
}

#[async_trait]
impl Store for PgStore {
    fn backend(&self) -> Backend {
        Backend::Postgres
    }

    async fn check_health(&self) -> Backend {
        Backend::Postgres
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let records = query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(records.into_iter().map(|record| record.0).collect())
    }

    async fn find_product(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let record = query_as::<Postgres, ProductRecord>(FIND_PRODUCT_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record.map(|record| record.0))
    }

    async fn replace_products(&self, products: Vec<Product>) -> Result<(), StoreError> {
        // Validate before touching the table.
        let catalog = Catalog::new(products)?;

        let mut tx = self.pool.begin().await?;

        query(DELETE_PRODUCTS_SQL).execute(&mut *tx).await?;

        for (position, product) in catalog.products().iter().enumerate() {
            query(INSERT_PRODUCT_SQL)
                .bind(&product.id)
                .bind(i32::try_from(position)?)
                .bind(&product.name)
                .bind(i64::try_from(product.price)?)
                .bind(&product.image)
                .bind(&product.description)
                .bind(&product.category)
                .bind(product.rating)
                .bind(i32::try_from(product.reviews)?)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn list_cart_items(&self) -> Result<Vec<CartLineItem>, StoreError> {
        let records = query_as::<Postgres, CartItemRecord>(LIST_CART_ITEMS_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(records.into_iter().map(|record| record.0).collect())
    }

    async fn add_cart_item(&self, item: NewCartLineItem) -> Result<CartLineItem, StoreError> {
        if item.quantity > MAX_QUANTITY {
            return Err(QuantityError::TooLarge.into());
        }

        // The upsert skips the update, and so returns no row, when the merge would overflow.
        let record = query_as::<Postgres, CartItemRecord>(ADD_CART_ITEM_SQL)
            .bind(item.id.into_uuid())
            .bind(&item.product_id)
            .bind(i32::try_from(item.quantity)?)
            .bind(SqlxTimestamp::from(item.added_at))
            .bind(i64::from(MAX_QUANTITY))
            .fetch_optional(&self.pool)
            .await?
            .ok_or(QuantityError::TooLarge)?;

        Ok(record.0)
    }

    async fn set_cart_item_quantity(
        &self,
        id: CartItemUuid,
        quantity: u32,
    ) -> Result<Option<CartLineItem>, StoreError> {
        let record = query_as::<Postgres, CartItemRecord>(UPDATE_CART_ITEM_QUANTITY_SQL)
            .bind(id.into_uuid())
            .bind(i32::try_from(quantity)?)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record.map(|record| record.0))
    }

    async fn delete_cart_item(&self, id: CartItemUuid) -> Result<bool, StoreError> {
        let rows_affected = query(DELETE_CART_ITEM_SQL)
            .bind(id.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    async fn clear_cart(&self) -> Result<u64, StoreError> {
        let rows_affected = query(CLEAR_CART_SQL)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
