//! Shopping cart.

mod data;
mod errors;
mod service;

pub use data::NewCartItem;
pub use errors::CartsServiceError;
pub use service::{CartsService, MockCartsService, StoreCartsService};
