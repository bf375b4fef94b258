//! Row mappings for the `PostgreSQL` store.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Row, postgres::PgRow};
use storefront::{
    cart::{CartItemUuid, CartLineItem},
    products::Product,
};

#[derive(Debug)]
pub(super) struct ProductRecord(pub(super) Product);

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self(Product {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            price: try_get_unsigned(row, "price")?,
            image: row.try_get("image")?,
            description: row.try_get("description")?,
            category: row.try_get("category")?,
            rating: row.try_get("rating")?,
            reviews: try_get_count(row, "reviews")?,
        }))
    }
}

#[derive(Debug)]
pub(super) struct CartItemRecord(pub(super) CartLineItem);

impl<'r> FromRow<'r, PgRow> for CartItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self(CartLineItem {
            id: CartItemUuid::from_uuid(row.try_get("uuid")?),
            product_id: row.try_get("product_id")?,
            quantity: try_get_count(row, "quantity")?,
            added_at: row.try_get::<SqlxTimestamp, _>("added_at")?.to_jiff(),
        }))
    }
}

fn try_get_unsigned(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let value: i64 = row.try_get(col)?;

    u64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

fn try_get_count(row: &PgRow, col: &str) -> Result<u32, sqlx::Error> {
    let value: i32 = row.try_get(col)?;

    u32::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
