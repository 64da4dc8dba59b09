#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use admin_mock::{AdminService, FixturesConfig, register_control_routes, register_routes};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use mock_scenarios::{Scenario, ScenarioDelays, ScenarioManager, ScenarioWrapper};
use serde_json::{Value, json};
use tower::ServiceExt as _;

struct TestApp {
    router: Router,
    manager: Arc<ScenarioManager>,
}

impl TestApp {
    fn new() -> Self {
        let manager = Arc::new(ScenarioManager::in_memory());
        let service = Arc::new(AdminService::new(FixturesConfig {
            products: 25,
            orders: 45,
        }));
        let wrapper = ScenarioWrapper::new(Arc::clone(&manager), ScenarioDelays::none());

        let router = register_routes(Router::new(), &service, &wrapper);
        let router = register_control_routes(router, service);
        let router = mock_scenarios::api::rest::register_routes(router, Arc::clone(&manager));

        Self { router, manager }
    }

    async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, axum::http::HeaderMap, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, headers, json)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let (status, _, body) = self.request("GET", uri, None).await;
        (status, body)
    }
}

#[tokio::test]
async fn product_pages_follow_counted_pagination() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/products?page=1&limit=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalCount"], 25);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(body["data"][0]["id"], "1");

    let (_, body) = app.get("/api/v1/products?page=3&limit=10").await;
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["21", "22", "23", "24", "25"]);

    let (status, body) = app.get("/api/v1/products?page=4&limit=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["totalCount"], 25);
    assert_eq!(body["totalPages"], 3);
}

#[tokio::test]
async fn default_page_size_is_ten() {
    let app = TestApp::new();
    let (_, body) = app.get("/api/v1/products").await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);
}

#[tokio::test]
async fn zero_limit_is_rejected() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/v1/products?limit=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn product_filters_apply_before_paging() {
    let app = TestApp::new();
    let (_, all) = app.get("/api/v1/products?limit=100").await;
    let expected = all["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| p["category"] == "Books" && p["price"].as_f64().unwrap() <= 200.0)
        .count();

    let (_, body) = app
        .get("/api/v1/products?category=Books&maxPrice=200&limit=2")
        .await;

    assert_eq!(body["totalCount"], expected);
    for product in body["data"].as_array().unwrap() {
        assert_eq!(product["category"], "Books");
    }
}

#[tokio::test]
async fn product_crud_round_trip() {
    let app = TestApp::new();

    let (status, headers, created) = app
        .request(
            "POST",
            "/api/v1/products",
            Some(json!({ "name": "Tea Pot", "price": 18.5, "category": "Home" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(headers[header::LOCATION], "/api/v1/products/26");
    assert_eq!(created["createdAt"], created["updatedAt"]);

    let (status, _, updated) = app
        .request(
            "PATCH",
            "/api/v1/products/26",
            Some(json!({ "stock": 4, "id": "999" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], "26");
    assert_eq!(updated["stock"], 4);
    assert_eq!(updated["name"], "Tea Pot");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let (status, _, body) = app.request("DELETE", "/api/v1/products/26", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = app.get("/api/v1/products/26").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": { "code": "NOT_FOUND", "message": "Product not found: 26" }
        })
    );
}

#[tokio::test]
async fn create_with_missing_fields_is_422() {
    let app = TestApp::new();
    let (status, _, body) = app
        .request("POST", "/api/v1/products", Some(json!({ "category": "Home" })))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["details"]["name"][0], "Name is required");
    assert_eq!(body["error"]["details"]["price"][0], "Price is required");
}

#[tokio::test]
async fn orders_use_cursor_pagination_newest_first() {
    let app = TestApp::new();

    let (_, first) = app.get("/api/v1/orders").await;
    assert_eq!(first["limit"], 20);
    assert_eq!(first["hasNext"], true);
    assert_eq!(first["data"][0]["id"], "45");
    assert!(first.get("totalCount").is_none());

    let (_, last) = app.get("/api/v1/orders?page=3").await;
    assert_eq!(last["data"].as_array().unwrap().len(), 5);
    assert_eq!(last["hasNext"], false);
}

#[tokio::test]
async fn order_status_update() {
    let app = TestApp::new();

    let (status, _, body) = app
        .request(
            "PATCH",
            "/api/v1/orders/3",
            Some(json!({ "status": "shipped" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "shipped");

    let (status, _, body) = app
        .request("PATCH", "/api/v1/orders/3", Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["details"]["status"][0], "Status is required");
}

#[tokio::test]
async fn empty_scenario_returns_empty_lists_but_entities_still_resolve() {
    let app = TestApp::new();
    app.manager.set(Scenario::Empty);

    let (status, body) = app.get("/api/v1/products?page=2&limit=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "data": [], "totalCount": 0, "page": 2, "limit": 5, "totalPages": 0 })
    );

    let (_, body) = app.get("/api/v1/orders").await;
    assert_eq!(body["hasNext"], false);
    assert_eq!(body["data"], json!([]));

    let (status, _) = app.get("/api/v1/products/1").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn failure_scenarios_apply_to_every_endpoint() {
    let app = TestApp::new();

    app.manager.set(Scenario::RateLimit);
    let (status, headers, body) = app.request("GET", "/api/v1/orders/1", None).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(headers[header::RETRY_AFTER], "60");
    assert_eq!(body["error"]["code"], "RATE_LIMIT");
    assert_eq!(body["error"]["details"]["retryAfter"], json!(["60"]));

    app.manager.set(Scenario::ServerError);
    let (status, _, body) = app
        .request("POST", "/api/v1/products", Some(json!({ "name": "X", "price": 1 })))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");

    app.manager.set(Scenario::ValidationError);
    let (status, body) = app.get("/api/v1/products").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    app.manager.reset();
    let (_, body) = app.get("/api/v1/products?limit=100").await;
    assert_eq!(body["totalCount"], 25);
}

#[tokio::test]
async fn network_error_breaks_the_connection() {
    let app = TestApp::new();
    app.manager.set(Scenario::NetworkError);

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .is_err()
    );
}

#[tokio::test]
async fn control_routes_ignore_the_active_scenario() {
    let app = TestApp::new();
    app.manager.set(Scenario::ServerError);

    let (status, body) = app.get("/__mock/v1/scenario").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scenario"], "server-error");

    let (status, _, body) = app.request("POST", "/__mock/v1/fixtures/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "products": 25, "orders": 45 }));
}

#[tokio::test]
async fn fixtures_reset_restores_deleted_entities() {
    let app = TestApp::new();
    app.request("DELETE", "/api/v1/products/1", None).await;
    assert_eq!(app.get("/api/v1/products/1").await.0, StatusCode::NOT_FOUND);

    app.request("POST", "/__mock/v1/fixtures/reset", None).await;

    assert_eq!(app.get("/api/v1/products/1").await.0, StatusCode::OK);
}

#[tokio::test]
async fn scenario_switch_over_http_drives_mock_endpoints() {
    let app = TestApp::new();

    let (status, _, _) = app
        .request(
            "PUT",
            "/__mock/v1/scenario",
            Some(json!({ "scenario": "rate-limit" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.get("/api/v1/products").await.0, StatusCode::TOO_MANY_REQUESTS);

    app.request("DELETE", "/__mock/v1/scenario", None).await;
    assert_eq!(app.get("/api/v1/products").await.0, StatusCode::OK);
}
