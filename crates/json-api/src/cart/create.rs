//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use serde::{Deserialize, Serialize};
use storefront_app::domain::carts::NewCartItem;

use crate::{extensions::*, state::State};

const DEFAULT_QUANTITY: i64 = 1;

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCartItemRequest {
    /// Product to add
    #[serde(default)]
    pub product_id: Option<String>,

    /// Units to add, 1 when omitted
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl From<AddCartItemRequest> for NewCartItem {
    fn from(request: AddCartItemRequest) -> Self {
        NewCartItem::new(
            request.product_id.unwrap_or_default(),
            request.quantity.unwrap_or(DEFAULT_QUANTITY),
        )
    }
}

/// Cart Item Added Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemAddedResponse {
    /// What happened
    pub message: String,

    /// Product that was added
    pub product_id: String,

    /// Quantity of the product now in the cart
    pub quantity: u32,
}

/// Add Cart Item Handler
///
/// Adding a product that is already in the cart increases that line's quantity.
#[endpoint(
    tags("cart"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::OK, description = "Item added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing product id or invalid quantity"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartItemAddedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let item = state
        .app
        .carts
        .add_item(json.into_inner().into())
        .await
        .or_status("failed to add cart item")?;

    Ok(Json(CartItemAddedResponse {
        message: "Item added to cart".to_string(),
        product_id: item.product_id,
        quantity: item.quantity,
    }))
}
