//! Storefront
//!
//! Storefront is the domain core of a small mock shop: a product catalog, cart line items,
//! cart pricing, and a simulated checkout that produces receipts.

pub mod cart;
pub mod checkout;
pub mod fixtures;
pub mod money;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod uuids;
