//! Pricing
//!
//! Joins cart line items against the catalog to produce a priced [`CartView`].

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{
    cart::{CartItemUuid, CartLineItem},
    products::{Catalog, Product},
};

/// Number of decimal places totals are rounded to.
pub const TOTAL_DECIMAL_PLACES: u32 = 2;

/// A priced cart row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartViewItem {
    /// Line item identifier
    pub id: CartItemUuid,

    /// Product identifier
    pub product_id: String,

    /// Quantity
    pub quantity: u32,

    /// Resolved product, absent when the product no longer exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,

    /// `price * quantity`, or 0 when the product is unresolved
    pub subtotal: u64,
}

/// A priced snapshot of the cart. Derived on every read, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartView {
    /// Priced rows in cart order
    pub items: Vec<CartViewItem>,

    /// Sum of all subtotals, rounded to cents
    pub total: u64,
}

impl CartView {
    /// Whether the cart has no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Price a single line item.
pub fn price_line_item(item: CartLineItem, catalog: &Catalog) -> CartViewItem {
    let product = catalog.get(&item.product_id).cloned();

    let subtotal = product.as_ref().map_or(0, |product| {
        product.price.saturating_mul(u64::from(item.quantity))
    });

    CartViewItem {
        id: item.id,
        product_id: item.product_id,
        quantity: item.quantity,
        product,
        subtotal,
    }
}

/// Price a whole cart.
///
/// Every line item is listed, including those whose product cannot be resolved; those contribute
/// a subtotal of 0.
pub fn price_cart(items: Vec<CartLineItem>, catalog: &Catalog) -> CartView {
    let items: Vec<CartViewItem> = items
        .into_iter()
        .map(|item| price_line_item(item, catalog))
        .collect();

    let total = items
        .iter()
        .fold(0_u64, |total, item| total.saturating_add(item.subtotal));

    // Integer subtotals are already whole cents, so rounding never changes the sum.
    CartView { items, total }
}

/// Round an amount to cents, with midpoints rounded away from zero.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(TOTAL_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum arbitrary amounts and round the result to cents.
///
/// Returns `None` when the sum does not fit a [`Decimal`].
pub fn total_of<I>(amounts: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
        .map(round_to_cents)
}
