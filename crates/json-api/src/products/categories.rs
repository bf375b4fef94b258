//! Product Categories Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, state::State};

/// Product Categories Handler
///
/// Returns the distinct product categories in catalog order.
#[endpoint(tags("products"), summary = "List Categories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<String>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let categories = state
        .app
        .catalog
        .categories()
        .await
        .or_status("failed to fetch categories")?;

    Ok(Json(categories))
}
