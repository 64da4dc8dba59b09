use axum::http::StatusCode;
use mock_scenarios::{ErrorBody, MockResponse, codes};
use mock_store::StoreError;

use crate::domain::error::DomainError;

impl From<DomainError> for MockResponse {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { resource, id } => {
                MockResponse::error(StatusCode::NOT_FOUND, ErrorBody::not_found(resource, &id))
            }
            DomainError::Validation(errors) => {
                MockResponse::error(StatusCode::UNPROCESSABLE_ENTITY, errors.into_body())
            }
            DomainError::InvalidInput(_) | DomainError::Store(StoreError::InvalidLimit) => {
                MockResponse::error(StatusCode::BAD_REQUEST, ErrorBody::bad_request(e.to_string()))
            }
            DomainError::Store(err @ StoreError::IdCollision(_)) => {
                tracing::error!(error = %err, "Entity store could not allocate an id");
                MockResponse::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(codes::INTERNAL_ERROR, err.to_string()),
                )
            }
        }
    }
}

/// 400 for a request that could not be decoded.
pub fn bad_request(e: &dyn std::error::Error) -> MockResponse {
    MockResponse::error(
        StatusCode::BAD_REQUEST,
        ErrorBody::bad_request(format!("Invalid request: {e}")),
    )
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use mock_scenarios::FieldErrors;

    #[test]
    fn not_found_maps_to_404() {
        let response = MockResponse::from(DomainError::not_found("Order", "7"));
        assert_eq!(response.status(), Some(StatusCode::NOT_FOUND));
        let body = response.body().unwrap();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Order not found: 7");
    }

    #[test]
    fn validation_maps_to_422_with_details() {
        let mut errors = FieldErrors::default();
        errors.add("status", "Status is required");
        let response = MockResponse::from(DomainError::Validation(errors));
        assert_eq!(response.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(
            response.body().unwrap()["error"]["details"]["status"][0],
            "Status is required"
        );
    }

    #[test]
    fn invalid_limit_maps_to_400() {
        let response = MockResponse::from(DomainError::from(StoreError::InvalidLimit));
        assert_eq!(response.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            response.body().unwrap()["error"]["message"],
            "Page size must be at least 1"
        );
    }

    #[test]
    fn id_collision_maps_to_500() {
        let response = MockResponse::from(DomainError::from(StoreError::id_collision("3")));
        assert_eq!(response.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
