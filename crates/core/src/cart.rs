//! Cart line items

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Cart line item identifier
pub type CartItemUuid = TypedUuid<CartLineItem>;

/// One cart row associating a product with a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Line item identifier, generated on creation
    pub id: CartItemUuid,

    /// Identifier of the product this row is for
    pub product_id: String,

    /// Quantity, always at least 1
    pub quantity: u32,

    /// When the row was first created
    pub added_at: Timestamp,
}

/// A line item that is about to be added to a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartLineItem {
    /// Identifier to use if a new row has to be created
    pub id: CartItemUuid,

    /// Product being added
    pub product_id: String,

    /// Quantity to add (merged into any existing row for the product)
    pub quantity: u32,

    /// Creation time to record if a new row has to be created
    pub added_at: Timestamp,
}

impl NewCartLineItem {
    /// Create an addition for the given product with a fresh id and the current time.
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: CartItemUuid::new(),
            product_id: product_id.into(),
            quantity,
            added_at: Timestamp::now(),
        }
    }

    /// The row this addition creates when the product is not in the cart yet.
    pub fn into_line_item(self) -> CartLineItem {
        CartLineItem {
            id: self.id,
            product_id: self.product_id,
            quantity: self.quantity,
            added_at: self.added_at,
        }
    }
}

/// Largest quantity a line item can hold, the range of a signed 32-bit column.
pub const MAX_QUANTITY: u32 = i32::MAX.unsigned_abs();

/// Invalid quantity values.
#[derive(Debug, Error, PartialEq)]
pub enum QuantityError {
    /// Quantity below the minimum of 1.
    #[error("Quantity must be at least 1")]
    TooSmall,

    /// Quantity that does not fit the storage range.
    #[error("Quantity is too large")]
    TooLarge,
}

/// Validate a client-supplied quantity.
///
/// # Errors
///
/// Returns [`QuantityError::TooSmall`] for values below 1, and [`QuantityError::TooLarge`] for
/// values that do not fit a signed 32-bit column.
pub fn parse_quantity(value: i64) -> Result<u32, QuantityError> {
    if value < 1 {
        return Err(QuantityError::TooSmall);
    }

    u32::try_from(value)
        .ok()
        .filter(|value| *value <= MAX_QUANTITY)
        .ok_or(QuantityError::TooLarge)
}

/// Merge an addition into a list of line items.
///
/// Increments the quantity of the row for the same product if there is one, otherwise appends a
/// new row. Returns the resulting row.
///
/// # Errors
///
/// Returns [`QuantityError::TooLarge`] when the merged quantity would exceed [`MAX_QUANTITY`]. The
/// items are left unchanged.
pub fn merge_line_item(
    items: &mut Vec<CartLineItem>,
    new: NewCartLineItem,
) -> Result<CartLineItem, QuantityError> {
    if new.quantity > MAX_QUANTITY {
        return Err(QuantityError::TooLarge);
    }

    if let Some(existing) = items
        .iter_mut()
        .find(|item| item.product_id == new.product_id)
    {
        existing.quantity = existing
            .quantity
            .checked_add(new.quantity)
            .filter(|quantity| *quantity <= MAX_QUANTITY)
            .ok_or(QuantityError::TooLarge)?;

        return Ok(existing.clone());
    }

    let item = new.into_line_item();

    items.push(item.clone());

    Ok(item)
}
