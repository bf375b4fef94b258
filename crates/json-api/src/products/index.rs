//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use storefront::products::ProductFilter;

use crate::{extensions::*, products::ProductResponse, state::State};

/// Product Index Handler
///
/// Returns the catalog, optionally narrowed by a case-insensitive search over name and
/// description and by category (`All` matches every category).
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    search: QueryParam<String, false>,
    category: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = ProductFilter {
        search: search.into_inner(),
        category: category.into_inner(),
    };

    let products = state
        .app
        .catalog
        .list_products(filter)
        .await
        .or_status("failed to fetch products")?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
