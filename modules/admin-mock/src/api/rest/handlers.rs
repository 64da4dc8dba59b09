use std::sync::Arc;

use async_trait::async_trait;
use axum::Extension;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::Json;
use mock_scenarios::{MockHandler, MockRequest, MockResponse, Scenario};
use mock_store::{CursorPage, Page};
use serde::Serialize;

use super::dto::{CreateProductRequest, OrderListQuery, ProductListQuery, SeedSummaryDto};
use super::error::bad_request;
use crate::domain::error::DomainError;
use crate::domain::order::{Order, OrderPatch};
use crate::domain::product::{Product, ProductPatch};
use crate::domain::service::{AdminService, validated_page};

fn respond<T: Serialize>(result: Result<T, DomainError>) -> MockResponse {
    match result {
        Ok(value) => MockResponse::ok(&value),
        Err(e) => e.into(),
    }
}

fn path_id(request: &MockRequest) -> Result<&str, MockResponse> {
    request
        .param("id")
        .ok_or_else(|| DomainError::invalid_input("missing id path parameter").into())
}

macro_rules! service_handler {
    ($($(#[$doc:meta])* $name:ident;)+) => {
        $(
            $(#[$doc])*
            pub struct $name {
                service: Arc<AdminService>,
            }

            impl $name {
                #[must_use]
                pub fn new(service: &Arc<AdminService>) -> Self {
                    Self {
                        service: Arc::clone(service),
                    }
                }
            }
        )+
    };
}

service_handler! {
    /// `GET /api/v1/products`; the `empty` scenario yields an empty page.
    ListProducts;
    /// `GET /api/v1/products/{id}`
    GetProduct;
    /// `POST /api/v1/products`
    CreateProduct;
    /// `PATCH /api/v1/products/{id}`
    UpdateProduct;
    /// `DELETE /api/v1/products/{id}`
    DeleteProduct;
    /// `GET /api/v1/orders`; the `empty` scenario yields an empty page.
    ListOrders;
    /// `GET /api/v1/orders/{id}`
    GetOrder;
    /// `PATCH /api/v1/orders/{id}`
    UpdateOrder;
}

#[async_trait]
impl MockHandler for ListProducts {
    async fn handle(&self, request: MockRequest) -> MockResponse {
        let query: ProductListQuery = match request.query_as() {
            Ok(query) => query,
            Err(e) => return bad_request(&e),
        };
        let list = match query.into_request() {
            Ok(list) => list,
            Err(e) => return e.into(),
        };

        if request.scenario == Scenario::Empty {
            return respond(validated_page(list.page).map(Page::<Product>::empty));
        }
        respond(self.service.list_products(&list))
    }
}

#[async_trait]
impl MockHandler for GetProduct {
    async fn handle(&self, request: MockRequest) -> MockResponse {
        match path_id(&request) {
            Ok(id) => respond(self.service.get_product(id)),
            Err(response) => response,
        }
    }
}

#[async_trait]
impl MockHandler for CreateProduct {
    async fn handle(&self, request: MockRequest) -> MockResponse {
        let body: CreateProductRequest = match request.body_as() {
            Ok(body) => body,
            Err(e) => return bad_request(&e),
        };

        match body.into_draft().and_then(|draft| self.service.create_product(draft)) {
            Ok(product) => {
                let response = MockResponse::json(StatusCode::CREATED, &product);
                match HeaderValue::try_from(format!("/api/v1/products/{}", product.id)) {
                    Ok(location) => response.with_header(header::LOCATION, location),
                    Err(_) => response,
                }
            }
            Err(e) => e.into(),
        }
    }
}

#[async_trait]
impl MockHandler for UpdateProduct {
    async fn handle(&self, request: MockRequest) -> MockResponse {
        let id = match path_id(&request) {
            Ok(id) => id,
            Err(response) => return response,
        };
        let patch: ProductPatch = match request.body_as() {
            Ok(patch) => patch,
            Err(e) => return bad_request(&e),
        };
        respond(self.service.update_product(id, patch))
    }
}

#[async_trait]
impl MockHandler for DeleteProduct {
    async fn handle(&self, request: MockRequest) -> MockResponse {
        let id = match path_id(&request) {
            Ok(id) => id,
            Err(response) => return response,
        };
        match self.service.delete_product(id) {
            Ok(()) => MockResponse::no_content(),
            Err(e) => e.into(),
        }
    }
}

#[async_trait]
impl MockHandler for ListOrders {
    async fn handle(&self, request: MockRequest) -> MockResponse {
        let query: OrderListQuery = match request.query_as() {
            Ok(query) => query,
            Err(e) => return bad_request(&e),
        };
        let list = match query.into_request() {
            Ok(list) => list,
            Err(e) => return e.into(),
        };

        if request.scenario == Scenario::Empty {
            return respond(validated_page(list.page).map(CursorPage::<Order>::empty));
        }
        respond(self.service.list_orders(&list))
    }
}

#[async_trait]
impl MockHandler for GetOrder {
    async fn handle(&self, request: MockRequest) -> MockResponse {
        match path_id(&request) {
            Ok(id) => respond(self.service.get_order(id)),
            Err(response) => response,
        }
    }
}

#[async_trait]
impl MockHandler for UpdateOrder {
    async fn handle(&self, request: MockRequest) -> MockResponse {
        let id = match path_id(&request) {
            Ok(id) => id,
            Err(response) => return response,
        };
        let patch: OrderPatch = match request.body_as() {
            Ok(patch) => patch,
            Err(e) => return bad_request(&e),
        };
        respond(self.service.update_order(id, patch))
    }
}

/// `POST /__mock/v1/fixtures/reset`
pub async fn reset_fixtures(
    Extension(service): Extension<Arc<AdminService>>,
) -> Json<SeedSummaryDto> {
    Json(service.reseed().into())
}
