//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{cart::MessageResponse, extensions::*, state::State};

/// Remove Cart Item Handler
///
/// Succeeds whether or not the line item exists.
#[endpoint(
    tags("cart"),
    summary = "Remove Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .carts
        .remove_item(&id.into_inner())
        .await
        .or_status("failed to remove cart item")?;

    Ok(Json(MessageResponse {
        message: "Item removed from cart".to_string(),
    }))
}
