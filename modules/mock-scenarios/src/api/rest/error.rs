//! REST error mapping for the control surface.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::domain::error::ScenarioError;
use crate::domain::scenario::Scenario;
use crate::mock::error_body::{ErrorBody, codes};

/// An error answered with the standard error body.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, body: ErrorBody) -> Self {
        Self { status, body }
    }

    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorBody::bad_request(message))
    }
}

impl From<ScenarioError> for ApiError {
    fn from(e: ScenarioError) -> Self {
        match e {
            ScenarioError::Unknown(name) => {
                let allowed = Scenario::ALL
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                let details = BTreeMap::from([(
                    "scenario".to_owned(),
                    vec![format!("must be one of: {allowed}")],
                )]);
                Self::new(
                    StatusCode::BAD_REQUEST,
                    ErrorBody::new(codes::UNKNOWN_SCENARIO, format!("Unknown scenario: {name}"))
                        .with_details(details),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
