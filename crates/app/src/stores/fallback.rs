//! `PostgreSQL` with an in-memory fallback.
//!
//! Requests go to `PostgreSQL` while it is reachable. The first time an operation fails because the
//! database cannot be reached, the store logs a warning, switches to the in-memory store and
//! retries the operation there. While offline, a request pings the database again at most once
//! per reconnect interval, and [`Store::check_health`] pings on every call. The first successful
//! ping switches back. Data written to memory while offline is not copied back.

use std::{
    sync::atomic::{AtomicBool, AtomicU64, Ordering},
    time::{Duration, Instant},
};

use async_trait::async_trait;
use storefront::{
    cart::{CartItemUuid, CartLineItem, NewCartLineItem},
    products::Product,
};
use tracing::{info, warn};

use super::{Backend, MemoryStore, PgStore, Store, StoreError};

/// How long requests wait between reconnect attempts by default.
pub const DEFAULT_RECONNECT_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub struct FallbackStore {
    primary: Option<PgStore>,
    memory: MemoryStore,
    online: AtomicBool,
    reconnect_interval: Duration,
    started: Instant,
    /// Milliseconds after `started` of the last failure or reconnect attempt.
    last_attempt_ms: AtomicU64,
}

impl FallbackStore {
    #[must_use]
    pub fn new(primary: PgStore, memory: MemoryStore) -> Self {
        Self {
            primary: Some(primary),
            memory,
            online: AtomicBool::new(true),
            reconnect_interval: DEFAULT_RECONNECT_INTERVAL,
            started: Instant::now(),
            last_attempt_ms: AtomicU64::new(0),
        }
    }

    /// A store with no database configured.
    #[must_use]
    pub fn memory_only(memory: MemoryStore) -> Self {
        Self {
            primary: None,
            memory,
            online: AtomicBool::new(false),
            reconnect_interval: DEFAULT_RECONNECT_INTERVAL,
            started: Instant::now(),
            last_attempt_ms: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn with_reconnect_interval(mut self, interval: Duration) -> Self {
        self.reconnect_interval = interval;
        self
    }

    fn now_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// The database, if it is online or answers a rate-limited reconnect ping.
    async fn primary(&self) -> Option<&PgStore> {
        let primary = self.primary.as_ref()?;

        if self.online.load(Ordering::Acquire) || self.reconnect(primary).await {
            return Some(primary);
        }

        None
    }

    /// Ping an offline database, unless another attempt happened within the reconnect interval.
    async fn reconnect(&self, primary: &PgStore) -> bool {
        if !self.claim_reconnect_attempt() {
            return false;
        }

        match primary.ping().await {
            Ok(()) => {
                self.go_online();
                true
            }
            Err(_unreachable) => false,
        }
    }

    /// Only one caller per interval wins the right to ping.
    fn claim_reconnect_attempt(&self) -> bool {
        let interval_ms = u64::try_from(self.reconnect_interval.as_millis()).unwrap_or(u64::MAX);
        let last = self.last_attempt_ms.load(Ordering::Acquire);
        let now = self.now_ms();

        now.saturating_sub(last) >= interval_ms
            && self
                .last_attempt_ms
                .compare_exchange(last, now, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
    }

    fn go_online(&self) {
        if !self.online.swap(true, Ordering::AcqRel) {
            info!("postgres reachable again, switching back from in-memory storage");
        }
    }

    fn go_offline(&self, operation: &'static str, error: &StoreError) {
        self.last_attempt_ms.store(self.now_ms(), Ordering::Release);

        if self.online.swap(false, Ordering::AcqRel) {
            warn!(
                operation,
                error = %error,
                "postgres unavailable, falling back to in-memory storage"
            );
        }
    }

    /// Whether a primary result should be returned, or the call retried in memory.
    fn settle<T>(
        &self,
        operation: &'static str,
        result: Result<T, StoreError>,
    ) -> Option<Result<T, StoreError>> {
        match result {
            Err(error) if error.is_unavailable() => {
                self.go_offline(operation, &error);
                None
            }
            result => Some(result),
        }
    }
}

#[async_trait]
impl Store for FallbackStore {
    fn backend(&self) -> Backend {
        if self.primary.is_some() && self.online.load(Ordering::Acquire) {
            Backend::Postgres
        } else {
            Backend::Memory
        }
    }

    async fn check_health(&self) -> Backend {
        let Some(primary) = &self.primary else {
            return Backend::Memory;
        };

        match primary.ping().await {
            Ok(()) => {
                self.go_online();

                Backend::Postgres
            }
            Err(error) => {
                self.go_offline("health check", &error);

                Backend::Memory
            }
        }
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        if let Some(primary) = self.primary().await
            && let Some(result) = self.settle("list_products", primary.list_products().await)
        {
            return result;
        }

        self.memory.list_products().await
    }

    async fn find_product(&self, id: &str) -> Result<Option<Product>, StoreError> {
        if let Some(primary) = self.primary().await
            && let Some(result) = self.settle("find_product", primary.find_product(id).await)
        {
            return result;
        }

        self.memory.find_product(id).await
    }

    async fn replace_products(&self, products: Vec<Product>) -> Result<(), StoreError> {
        if let Some(primary) = self.primary().await
            && let Some(result) = self.settle(
                "replace_products",
                primary.replace_products(products.clone()).await,
            )
        {
            return result;
        }

        self.memory.replace_products(products).await
    }

    async fn list_cart_items(&self) -> Result<Vec<CartLineItem>, StoreError> {
        if let Some(primary) = self.primary().await
            && let Some(result) = self.settle("list_cart_items", primary.list_cart_items().await)
        {
            return result;
        }

        self.memory.list_cart_items().await
    }

    async fn add_cart_item(&self, item: NewCartLineItem) -> Result<CartLineItem, StoreError> {
        if let Some(primary) = self.primary().await
            && let Some(result) =
                self.settle("add_cart_item", primary.add_cart_item(item.clone()).await)
        {
            return result;
        }

        self.memory.add_cart_item(item).await
    }

    async fn set_cart_item_quantity(
        &self,
        id: CartItemUuid,
        quantity: u32,
    ) -> Result<Option<CartLineItem>, StoreError> {
        if let Some(primary) = self.primary().await
            && let Some(result) = self.settle(
                "set_cart_item_quantity",
                primary.set_cart_item_quantity(id, quantity).await,
            )
        {
            return result;
        }

        self.memory.set_cart_item_quantity(id, quantity).await
    }

    async fn delete_cart_item(&self, id: CartItemUuid) -> Result<bool, StoreError> {
        if let Some(primary) = self.primary().await
            && let Some(result) = self.settle("delete_cart_item", primary.delete_cart_item(id).await)
        {
            return result;
        }

        self.memory.delete_cart_item(id).await
    }

    async fn clear_cart(&self) -> Result<u64, StoreError> {
        if let Some(primary) = self.primary().await
            && let Some(result) = self.settle("clear_cart", primary.clear_cart().await)
        {
            return result;
        }

        self.memory.clear_cart().await
    }
}
