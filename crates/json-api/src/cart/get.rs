//! Get Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{cart::CartResponse, extensions::*, state::State};

/// Get Cart Handler
///
/// Returns every line item priced against the current catalog, plus the total.
#[endpoint(tags("cart"), summary = "Get Cart")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .get_cart()
        .await
        .or_status("failed to fetch cart")?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use storefront::{
        cart::CartItemUuid,
        pricing::{CartView, CartViewItem},
        products::CatalogError,
    };
    use storefront_app::{
        domain::carts::{CartsServiceError, MockCartsService},
        stores::StoreError,
    };
    use testresult::TestResult;

    use crate::{products::tests::make_product, test_helpers::carts_service};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_priced_items() -> TestResult {
        let mut carts = MockCartsService::new();
        let id = CartItemUuid::new();

        carts.expect_get_cart().once().return_once(move || {
            Ok(CartView {
                items: vec![
                    CartViewItem {
                        id,
                        product_id: "1".to_string(),
                        quantity: 2,
                        product: Some(make_product("1", "Audio", 8299)),
                        subtotal: 16598,
                    },
                    CartViewItem {
                        id: CartItemUuid::new(),
                        product_id: "gone".to_string(),
                        quantity: 1,
                        product: None,
                        subtotal: 0,
                    },
                ],
                total: 16598,
            })
        });

        let response: CartResponse = TestClient::get("http://example.com/cart")
            .send(&make_service(carts))
            .await
            .take_json()
            .await?;

        assert_eq!(response.total, 16598);
        assert_eq!(response.items.len(), 2);

        let first = response.items.first().ok_or("missing first item")?;
        assert_eq!(first.id, id.to_string());
        assert_eq!(first.subtotal, 16598);

        let second = response.items.get(1).ok_or("missing second item")?;
        assert!(second.product.is_none());
        assert_eq!(second.subtotal, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_empty_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_get_cart()
            .once()
            .return_once(|| Ok(CartView::default()));

        let response: CartResponse = TestClient::get("http://example.com/cart")
            .send(&make_service(carts))
            .await
            .take_json()
            .await?;

        assert!(response.items.is_empty());
        assert_eq!(response.total, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_store_error_returns_500() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_get_cart().once().return_once(|| {
            Err(CartsServiceError::Store(StoreError::Catalog(
                CatalogError::DuplicateProductId("1".to_string()),
            )))
        });

        let res = TestClient::get("http://example.com/cart")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
