//! Cart response bodies

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use storefront::pricing::{CartView, CartViewItem};

use crate::products::ProductResponse;

/// The priced cart.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Line items, oldest first
    pub items: Vec<CartItemResponse>,

    /// Sum of the item subtotals
    pub total: u64,
}

impl From<CartView> for CartResponse {
    fn from(cart: CartView) -> Self {
        Self {
            items: cart.items.into_iter().map(Into::into).collect(),
            total: cart.total,
        }
    }
}

/// A priced cart line item.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemResponse {
    /// Line item identifier
    pub id: String,

    /// Product in this line
    pub product_id: String,

    /// Units of the product
    pub quantity: u32,

    /// The product, absent when it is no longer in the catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductResponse>,

    /// Product price times quantity, 0 when the product is absent
    pub subtotal: u64,
}

impl From<CartViewItem> for CartItemResponse {
    fn from(item: CartViewItem) -> Self {
        Self {
            id: item.id.to_string(),
            product_id: item.product_id,
            quantity: item.quantity,
            product: item.product.map(Into::into),
            subtotal: item.subtotal,
        }
    }
}

/// Acknowledgement with a human-readable message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    /// What happened
    pub message: String,
}
