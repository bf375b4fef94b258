//! Product catalog.

mod errors;
mod service;

pub use errors::CatalogServiceError;
pub use service::{CatalogService, MockCatalogService, StoreCatalogService};
