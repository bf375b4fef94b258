//! Checkout bodies

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use storefront::{
    checkout::{CheckoutItem, CustomerInfo, Receipt},
    money::serde_amount,
};

use crate::products::ProductResponse;

/// Customer contact details.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerInfoBody {
    /// Full name
    #[serde(default)]
    pub name: String,

    /// Email address
    #[serde(default)]
    pub email: String,
}

impl From<CustomerInfoBody> for CustomerInfo {
    fn from(body: CustomerInfoBody) -> Self {
        Self {
            name: body.name,
            email: body.email,
        }
    }
}

impl From<CustomerInfo> for CustomerInfoBody {
    fn from(customer: CustomerInfo) -> Self {
        Self {
            name: customer.name,
            email: customer.email,
        }
    }
}

/// A cart line as the client saw it when checking out.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutItemBody {
    /// Line item identifier
    #[serde(default)]
    pub id: String,

    /// Product in this line
    #[serde(default)]
    pub product_id: String,

    /// Units of the product
    #[serde(default)]
    pub quantity: u32,

    /// The product, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductResponse>,

    /// Line subtotal
    #[serde(default, with = "serde_amount")]
    #[salvo(schema(value_type = f64))]
    pub subtotal: Decimal,
}

impl From<CheckoutItemBody> for CheckoutItem {
    fn from(body: CheckoutItemBody) -> Self {
        Self {
            id: body.id,
            product_id: body.product_id,
            quantity: body.quantity,
            product: body.product.map(Into::into),
            subtotal: body.subtotal,
        }
    }
}

impl From<CheckoutItem> for CheckoutItemBody {
    fn from(item: CheckoutItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            quantity: item.quantity,
            product: item.product.map(Into::into),
            subtotal: item.subtotal,
        }
    }
}

/// Receipt for a completed checkout.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReceiptResponse {
    /// Receipt identifier
    pub id: String,

    /// When the order was placed (RFC 3339)
    pub timestamp: String,

    /// Who placed the order
    pub customer: CustomerInfoBody,

    /// What was ordered
    pub items: Vec<CheckoutItemBody>,

    /// Sum of the item subtotals, rounded to cents
    #[serde(with = "serde_amount")]
    #[salvo(schema(value_type = f64))]
    pub total: Decimal,

    /// Always `completed`
    pub status: String,
}

impl From<Receipt> for ReceiptResponse {
    fn from(receipt: Receipt) -> Self {
        Self {
            id: receipt.id.to_string(),
            timestamp: receipt.timestamp.to_string(),
            customer: receipt.customer.into(),
            items: receipt.items.into_iter().map(Into::into).collect(),
            total: receipt.total,
            status: receipt.status.as_str().to_string(),
        }
    }
}
