//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// New quantity, at least 1
    #[serde(default)]
    pub quantity: Option<i64>,
}

/// Cart Item Updated Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemUpdatedResponse {
    /// What happened
    pub message: String,

    /// The line item's quantity
    pub quantity: u32,
}

/// Update Cart Item Handler
#[endpoint(
    tags("cart"),
    summary = "Update Cart Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Cart item updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Quantity below 1"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartItemUpdatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    // A missing quantity fails the same validation as zero.
    let quantity = json.into_inner().quantity.unwrap_or_default();

    let item = state
        .app
        .carts
        .update_quantity(&id.into_inner(), quantity)
        .await
        .or_status("failed to update cart item")?;

    Ok(Json(CartItemUpdatedResponse {
        message: "Cart item updated".to_string(),
        quantity: item.quantity,
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use storefront::cart::{CartItemUuid, CartLineItem, QuantityError};
    use storefront_app::domain::carts::{CartsServiceError, MockCartsService};
    use testresult::TestResult;

    use crate::test_helpers::carts_service;

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("cart/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_returns_new_quantity() -> TestResult {
        let id = CartItemUuid::new();
        let expected = id.to_string();
        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .withf(move |item, quantity| item.to_string() == expected && *quantity == 4)
            .return_once(move |_, _| {
                Ok(CartLineItem {
                    id,
                    product_id: "1".to_string(),
                    quantity: 4,
                    added_at: Timestamp::UNIX_EPOCH,
                })
            });

        let response: CartItemUpdatedResponse =
            TestClient::put(format!("http://example.com/cart/{id}"))
                .json(&json!({ "quantity": 4 }))
                .send(&make_service(carts))
                .await
                .take_json()
                .await?;

        assert_eq!(response.message, "Cart item updated");
        assert_eq!(response.quantity, 4);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_quantity_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .withf(|_, quantity| *quantity == 0)
            .return_once(|_, _| Err(CartsServiceError::InvalidQuantity(QuantityError::TooSmall)));

        let res = TestClient::put(format!("http://example.com/cart/{}", CartItemUuid::new()))
            .json(&json!({}))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_item_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .withf(|item, _| item.to_string() == "not-a-uuid")
            .return_once(|_, _| Err(CartsServiceError::ItemNotFound));

        let res = TestClient::put("http://example.com/cart/not-a-uuid")
            .json(&json!({ "quantity": 2 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
