//! App Router

use salvo::{
    affix_state::inject,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors},
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use storefront_app::context::AppContext;

use crate::{
    cart, checkout, health,
    observability::{metrics_handler, request_logging},
    products,
    state::State,
};

/// Storefront routes, relative to wherever they are mounted.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("categories").get(products::categories::handler)),
        )
        .push(
            Router::with_path("cart")
                .get(cart::get::handler)
                .post(cart::create::handler)
                .push(
                    Router::with_path("{id}")
                        .put(cart::update::handler)
                        .delete(cart::delete::handler),
                ),
        )
        .push(Router::with_path("checkout").post(checkout::create::handler))
        .push(Router::with_path("health").get(health::handler))
}

/// The complete HTTP service.
///
/// Storefront routes are served at the root and again under `/api`, where the browser client
/// expects them.
pub(crate) fn service(app: AppContext) -> Service {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(request_logging)
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(app_router())
        .push(Router::with_path("api").push(app_router()));

    let doc = OpenApi::new("Storefront API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let cors = Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any())
        .into_handler();

    Service::new(router).hoop(cors)
}
