//! Scenario-driven decorator around mock handlers.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::{HeaderValue, StatusCode, header};

use super::error_body::{ErrorBody, FieldErrors};
use super::request::MockRequest;
use super::response::MockResponse;
use crate::domain::delays::ScenarioDelays;
use crate::domain::manager::ScenarioManager;
use crate::domain::scenario::Scenario;

/// Seconds advertised in `Retry-After` under `rate-limit`.
pub const RETRY_AFTER_SECS: u64 = 60;

/// An asynchronous mock endpoint.
///
/// Implementations only cover the happy path (and `empty`, by inspecting
/// [`MockRequest::scenario`]); failure scenarios are handled by [`ScenarioHandler`].
#[async_trait]
pub trait MockHandler: Send + Sync {
    async fn handle(&self, request: MockRequest) -> MockResponse;
}

#[async_trait]
impl<H: MockHandler + ?Sized> MockHandler for Arc<H> {
    async fn handle(&self, request: MockRequest) -> MockResponse {
        (**self).handle(request).await
    }
}

/// A handler whose behaviour is decided by the active scenario.
pub struct ScenarioHandler<H> {
    manager: Arc<ScenarioManager>,
    delays: ScenarioDelays,
    inner: H,
}

/// Wraps `inner` so it honours the scenario held by `manager`.
pub fn with_scenarios<H: MockHandler>(
    manager: Arc<ScenarioManager>,
    delays: ScenarioDelays,
    inner: H,
) -> ScenarioHandler<H> {
    ScenarioHandler {
        manager,
        delays,
        inner,
    }
}

#[async_trait]
impl<H: MockHandler> MockHandler for ScenarioHandler<H> {
    async fn handle(&self, mut request: MockRequest) -> MockResponse {
        let scenario = self.manager.current();
        request.scenario = scenario;
        tracing::trace!(
            %scenario,
            short_circuit = scenario.short_circuits(),
            method = %request.method,
            "Dispatching mock request"
        );

        match scenario {
            Scenario::ServerError => {
                pause(self.delays.server_error).await;
                tracing::debug!(%scenario, "Simulating internal server error");
                MockResponse::error(StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::internal())
            }
            Scenario::RateLimit => {
                tracing::debug!(%scenario, "Simulating rate limit");
                MockResponse::error(
                    StatusCode::TOO_MANY_REQUESTS,
                    ErrorBody::rate_limit(RETRY_AFTER_SECS),
                )
                .with_header(header::RETRY_AFTER, HeaderValue::from(RETRY_AFTER_SECS))
            }
            Scenario::NetworkError => {
                tracing::debug!(%scenario, "Simulating network failure");
                MockResponse::NetworkFailure
            }
            Scenario::ValidationError => {
                pause(self.delays.validation_error).await;
                tracing::debug!(%scenario, "Simulating validation failure");
                MockResponse::error(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    simulated_validation_errors().into_body(),
                )
            }
            Scenario::LoadingSlow => {
                pause(self.delays.loading_slow).await;
                self.inner.handle(request).await
            }
            Scenario::Success | Scenario::Empty => {
                pause(self.delays.default).await;
                self.inner.handle(request).await
            }
        }
    }
}

/// Builds [`ScenarioHandler`]s sharing one manager and delay profile.
#[derive(Clone)]
pub struct ScenarioWrapper {
    manager: Arc<ScenarioManager>,
    delays: ScenarioDelays,
}

impl ScenarioWrapper {
    #[must_use]
    pub fn new(manager: Arc<ScenarioManager>, delays: ScenarioDelays) -> Self {
        Self { manager, delays }
    }

    pub fn wrap<H: MockHandler>(&self, inner: H) -> Arc<ScenarioHandler<H>> {
        Arc::new(with_scenarios(
            Arc::clone(&self.manager),
            self.delays.clone(),
            inner,
        ))
    }

    #[must_use]
    pub fn manager(&self) -> &Arc<ScenarioManager> {
        &self.manager
    }
}

fn simulated_validation_errors() -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.add("name", "Name is required");
    errors.add("price", "Price must be a positive number");
    errors
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
