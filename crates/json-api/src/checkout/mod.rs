//! Checkout

pub(crate) mod create;
mod models;

pub(crate) use models::{CheckoutItemBody, CustomerInfoBody, ReceiptResponse};
