//! Checkout service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use storefront::checkout::{self, CheckoutItem, CustomerInfo, Receipt, ReceiptUuid};
use tracing::info;

use crate::{domain::checkout::errors::CheckoutServiceError, stores::Store};

#[derive(Clone)]
pub struct StoreCheckoutService {
    store: Arc<dyn Store>,
}

impl StoreCheckoutService {
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CheckoutService for StoreCheckoutService {
    async fn checkout(
        &self,
        items: Vec<CheckoutItem>,
        customer: CustomerInfo,
    ) -> Result<Receipt, CheckoutServiceError> {
        let receipt = checkout::confirm(items, customer, ReceiptUuid::new(), Timestamp::now())?;

        let cleared = self.store.clear_cart().await?;

        info!(
            receipt = %receipt.id,
            items = receipt.items.len(),
            total = %receipt.total,
            cleared,
            "checkout completed"
        );

        Ok(receipt)
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Validate the order, issue a receipt and empty the cart.
    ///
    /// Nothing is charged. The receipt total is the sum of the submitted item subtotals.
    async fn checkout(
        &self,
        items: Vec<CheckoutItem>,
        customer: CustomerInfo,
    ) -> Result<Receipt, CheckoutServiceError>;
}
