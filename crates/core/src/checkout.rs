//! Checkout
//!
//! Validation of a cart snapshot and customer details, receipt construction, and the checkout
//! stage machine a shop front walks through.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    money::serde_amount,
    pricing::{CartViewItem, total_of},
    products::Product,
    uuids::TypedUuid,
};

/// Receipt identifier
pub type ReceiptUuid = TypedUuid<Receipt>;

/// Checkout failures.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    /// The snapshot has no items.
    #[error("Cart is empty")]
    EmptyCart,

    /// The customer name is blank.
    #[error("Customer name is required")]
    MissingName,

    /// The customer email is blank or has no `@`.
    #[error("A valid email address is required")]
    InvalidEmail,

    /// The subtotals add up to more than an amount can hold.
    #[error("Cart total is out of range")]
    TotalOutOfRange,

    /// The requested stage transition is not allowed from the current stage.
    #[error("cannot {action} while {stage}")]
    InvalidTransition {
        /// Current stage
        stage: &'static str,

        /// Attempted transition
        action: &'static str,
    },
}

/// Customer contact details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    /// Customer name
    #[serde(default)]
    pub name: String,

    /// Customer email
    #[serde(default)]
    pub email: String,
}

/// One row of the cart snapshot submitted for checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItem {
    /// Line item identifier as the client knows it
    #[serde(default)]
    pub id: String,

    /// Product identifier
    #[serde(default)]
    pub product_id: String,

    /// Quantity
    #[serde(default)]
    pub quantity: u32,

    /// Product details, if the client supplied them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,

    /// Row subtotal
    #[serde(with = "serde_amount")]
    pub subtotal: Decimal,
}

impl From<CartViewItem> for CheckoutItem {
    fn from(item: CartViewItem) -> Self {
        Self {
            id: item.id.to_string(),
            product_id: item.product_id,
            quantity: item.quantity,
            product: item.product,
            subtotal: Decimal::from(item.subtotal),
        }
    }
}

/// Receipt status. Receipts only exist for completed checkouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    /// The checkout completed.
    Completed,
}

impl ReceiptStatus {
    /// Wire name of the status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
        }
    }
}

/// Immutable record of a completed checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Receipt identifier
    pub id: ReceiptUuid,

    /// When the checkout completed
    pub timestamp: Timestamp,

    /// Customer details
    pub customer: CustomerInfo,

    /// Snapshot of the cart rows at checkout time
    pub items: Vec<CheckoutItem>,

    /// Sum of item subtotals, rounded to cents
    #[serde(with = "serde_amount")]
    pub total: Decimal,

    /// Always [`ReceiptStatus::Completed`]
    pub status: ReceiptStatus,
}

/// Check a snapshot and customer details.
///
/// Checks run in order: non-empty snapshot, then non-blank name, then an email that is non-blank
/// and contains `@`. The email check is deliberately loose.
///
/// # Errors
///
/// Returns the first failing check.
pub fn validate(items: &[CheckoutItem], customer: &CustomerInfo) -> Result<(), CheckoutError> {
    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    if customer.name.trim().is_empty() {
        return Err(CheckoutError::MissingName);
    }

    let email = customer.email.trim();

    if email.is_empty() || !email.contains('@') {
        return Err(CheckoutError::InvalidEmail);
    }

    Ok(())
}

/// Validate a snapshot and produce its receipt.
///
/// The total is recomputed from the item subtotals; no client-side total is consulted.
///
/// # Errors
///
/// Returns a validation error from [`validate`], or [`CheckoutError::TotalOutOfRange`] when the
/// subtotals cannot be summed.
pub fn confirm(
    items: Vec<CheckoutItem>,
    customer: CustomerInfo,
    id: ReceiptUuid,
    timestamp: Timestamp,
) -> Result<Receipt, CheckoutError> {
    validate(&items, &customer)?;

    let total =
        total_of(items.iter().map(|item| item.subtotal)).ok_or(CheckoutError::TotalOutOfRange)?;

    Ok(Receipt {
        id,
        timestamp,
        customer,
        items,
        total,
        status: ReceiptStatus::Completed,
    })
}

/// Where a shopper is in the checkout flow.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CheckoutStage {
    /// Cart visible and editable.
    #[default]
    Reviewing,

    /// Customer details form shown.
    AwaitingConfirmation,

    /// Receipt shown.
    Completed(Box<Receipt>),
}

impl CheckoutStage {
    fn name(&self) -> &'static str {
        match self {
            Self::Reviewing => "reviewing",
            Self::AwaitingConfirmation => "awaiting confirmation",
            Self::Completed(_) => "completed",
        }
    }

    fn invalid(&self, action: &'static str) -> CheckoutError {
        CheckoutError::InvalidTransition {
            stage: self.name(),
            action,
        }
    }

    /// Move from reviewing the cart to the customer details form.
    ///
    /// # Errors
    ///
    /// Fails unless reviewing, or when the cart is empty.
    pub fn proceed(&mut self, items: &[CheckoutItem]) -> Result<(), CheckoutError> {
        if *self != Self::Reviewing {
            return Err(self.invalid("proceed"));
        }

        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        *self = Self::AwaitingConfirmation;

        Ok(())
    }

    /// Abandon the customer details form and return to the cart.
    ///
    /// # Errors
    ///
    /// Fails unless awaiting confirmation.
    pub fn cancel(&mut self) -> Result<(), CheckoutError> {
        if *self != Self::AwaitingConfirmation {
            return Err(self.invalid("cancel"));
        }

        *self = Self::Reviewing;

        Ok(())
    }

    /// Confirm the checkout. On failure the stage is unchanged.
    ///
    /// # Errors
    ///
    /// Fails unless awaiting confirmation, or when [`validate`] rejects the input.
    pub fn confirm(
        &mut self,
        items: Vec<CheckoutItem>,
        customer: CustomerInfo,
        id: ReceiptUuid,
        timestamp: Timestamp,
    ) -> Result<&Receipt, CheckoutError> {
        if *self != Self::AwaitingConfirmation {
            return Err(self.invalid("confirm"));
        }

        *self = Self::Completed(Box::new(confirm(items, customer, id, timestamp)?));

        self.receipt().ok_or(CheckoutError::InvalidTransition {
            stage: "completed",
            action: "confirm",
        })
    }

    /// Dismiss the receipt and start over.
    ///
    /// # Errors
    ///
    /// Fails unless completed.
    pub fn finish(&mut self) -> Result<(), CheckoutError> {
        if !matches!(self, Self::Completed(_)) {
            return Err(self.invalid("finish"));
        }

        *self = Self::Reviewing;

        Ok(())
    }

    /// The receipt, once completed.
    pub fn receipt(&self) -> Option<&Receipt> {
        match self {
            Self::Completed(receipt) => Some(receipt),
            Self::Reviewing | Self::AwaitingConfirmation => None,
        }
    }
}
