//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use storefront_app::{
    context::AppContext,
    domain::{
        carts::MockCartsService, catalog::MockCatalogService, checkout::MockCheckoutService,
    },
    stores::MockStore,
};

use crate::state::State;

fn strict_store_mock() -> MockStore {
    let mut store = MockStore::new();

    store.expect_backend().never();
    store.expect_check_health().never();
    store.expect_list_products().never();
    store.expect_find_product().never();
    store.expect_replace_products().never();
    store.expect_list_cart_items().never();
    store.expect_add_cart_item().never();
    store.expect_set_cart_item_quantity().never();
    store.expect_delete_cart_item().never();
    store.expect_clear_cart().never();

    store
}

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_list_products().never();
    catalog.expect_categories().never();

    catalog
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_item().never();
    carts.expect_update_quantity().never();
    carts.expect_remove_item().never();
    carts.expect_clear().never();

    carts
}

fn strict_checkout_mock() -> MockCheckoutService {
    let mut checkout = MockCheckoutService::new();

    checkout.expect_checkout().never();

    checkout
}

struct Mocks {
    store: MockStore,
    catalog: MockCatalogService,
    carts: MockCartsService,
    checkout: MockCheckoutService,
}

impl Mocks {
    fn strict() -> Self {
        Self {
            store: strict_store_mock(),
            catalog: strict_catalog_mock(),
            carts: strict_carts_mock(),
            checkout: strict_checkout_mock(),
        }
    }

    fn into_service(self, route: Router) -> Service {
        let app = AppContext {
            store: Arc::new(self.store),
            catalog: Arc::new(self.catalog),
            carts: Arc::new(self.carts),
            checkout: Arc::new(self.checkout),
        };

        Service::new(
            Router::new()
                .hoop(inject(State::from_app_context(app)))
                .push(route),
        )
    }
}

pub(crate) fn store_service(store: MockStore, route: Router) -> Service {
    Mocks {
        store,
        ..Mocks::strict()
    }
    .into_service(route)
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    Mocks {
        catalog,
        ..Mocks::strict()
    }
    .into_service(route)
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Mocks {
        carts,
        ..Mocks::strict()
    }
    .into_service(route)
}

pub(crate) fn checkout_service(checkout: MockCheckoutService, route: Router) -> Service {
    Mocks {
        checkout,
        ..Mocks::strict()
    }
    .into_service(route)
}
