//! Cart inputs.

/// A request to put a product in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub product_id: String,
    pub quantity: i64,
}

impl NewCartItem {
    pub fn new(product_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}
