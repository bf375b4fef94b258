//! Test context for service-level tests.

use std::sync::Arc;

use crate::{
    domain::{
        carts::StoreCartsService, catalog::StoreCatalogService, checkout::StoreCheckoutService,
    },
    stores::{FallbackStore, MemoryStore, Store},
};

/// Concrete services over a fresh in-memory store.
pub(crate) struct TestContext {
    pub store: Arc<dyn Store>,
    pub catalog: StoreCatalogService,
    pub carts: StoreCartsService,
    pub checkout: StoreCheckoutService,
}

impl TestContext {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let store: Arc<dyn Store> = Arc::new(FallbackStore::memory_only(MemoryStore::seeded()?));

        Ok(Self {
            catalog: StoreCatalogService::new(Arc::clone(&store)),
            carts: StoreCartsService::new(Arc::clone(&store)),
            checkout: StoreCheckoutService::new(Arc::clone(&store)),
            store,
        })
    }
}
