use std::sync::Arc;

use axum::routing::{MethodFilter, post};
use axum::{Extension, Router};
use mock_scenarios::ScenarioWrapper;
use mock_scenarios::api::rest::endpoint;

use super::handlers::{
    CreateProduct, DeleteProduct, GetOrder, GetProduct, ListOrders, ListProducts, UpdateOrder,
    UpdateProduct, reset_fixtures,
};
use crate::domain::service::AdminService;

pub const PRODUCTS_PATH: &str = "/api/v1/products";
pub const PRODUCT_PATH: &str = "/api/v1/products/{id}";
pub const ORDERS_PATH: &str = "/api/v1/orders";
pub const ORDER_PATH: &str = "/api/v1/orders/{id}";
pub const FIXTURES_RESET_PATH: &str = "/__mock/v1/fixtures/reset";

/// Mounts the product and order endpoints, each wrapped by `wrapper`.
pub fn register_routes(
    router: Router,
    service: &Arc<AdminService>,
    wrapper: &ScenarioWrapper,
) -> Router {
    router
        .route(
            PRODUCTS_PATH,
            endpoint(MethodFilter::GET, wrapper.wrap(ListProducts::new(service))).merge(
                endpoint(MethodFilter::POST, wrapper.wrap(CreateProduct::new(service))),
            ),
        )
        .route(
            PRODUCT_PATH,
            endpoint(MethodFilter::GET, wrapper.wrap(GetProduct::new(service)))
                .merge(endpoint(
                    MethodFilter::PATCH,
                    wrapper.wrap(UpdateProduct::new(service)),
                ))
                .merge(endpoint(
                    MethodFilter::DELETE,
                    wrapper.wrap(DeleteProduct::new(service)),
                )),
        )
        .route(
            ORDERS_PATH,
            endpoint(MethodFilter::GET, wrapper.wrap(ListOrders::new(service))),
        )
        .route(
            ORDER_PATH,
            endpoint(MethodFilter::GET, wrapper.wrap(GetOrder::new(service))).merge(endpoint(
                MethodFilter::PATCH,
                wrapper.wrap(UpdateOrder::new(service)),
            )),
        )
}

/// Mounts fixture control endpoints; these are never scenario-wrapped.
pub fn register_control_routes(router: Router, service: Arc<AdminService>) -> Router {
    let control = Router::new()
        .route(FIXTURES_RESET_PATH, post(reset_fixtures))
        .layer(Extension(service));
    router.merge(control)
}
