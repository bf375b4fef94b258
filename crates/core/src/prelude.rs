//! Storefront Prelude

pub use crate::{
    cart::{
        CartItemUuid, CartLineItem, MAX_QUANTITY, NewCartLineItem, QuantityError, merge_line_item,
        parse_quantity,
    },
    checkout::{
        CheckoutError, CheckoutItem, CheckoutStage, CustomerInfo, Receipt, ReceiptStatus,
        ReceiptUuid,
    },
    money::{format_price, format_price_with_decimals},
    pricing::{CartView, CartViewItem, price_cart, round_to_cents},
    products::{Catalog, CatalogError, Product, ProductFilter},
};
