//! Checkout Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    checkout::{CheckoutItemBody, CustomerInfoBody, ReceiptResponse},
    extensions::*,
    state::State,
};

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutRequest {
    /// The cart as the client last saw it
    #[serde(default)]
    pub cart_items: Vec<CheckoutItemBody>,

    /// Customer contact details
    #[serde(default)]
    pub customer_info: Option<CustomerInfoBody>,
}

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    /// What happened
    pub message: String,

    /// The issued receipt
    pub receipt: ReceiptResponse,
}

/// Checkout Handler
///
/// Issues a receipt for the submitted items and empties the cart. No payment is taken.
#[endpoint(
    tags("checkout"),
    summary = "Checkout",
    responses(
        (status_code = StatusCode::OK, description = "Checkout successful"),
        (status_code = StatusCode::BAD_REQUEST, description = "Empty cart or invalid customer details"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = json.into_inner();

    let receipt = state
        .app
        .checkout
        .checkout(
            request.cart_items.into_iter().map(Into::into).collect(),
            request.customer_info.unwrap_or_default().into(),
        )
        .await
        .or_status("failed to check out")?;

    Ok(Json(CheckoutResponse {
        message: "Checkout successful".to_string(),
        receipt: receipt.into(),
    }))
}
