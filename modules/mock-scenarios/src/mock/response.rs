use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use serde::Serialize;

use super::error_body::ErrorBody;

/// What a mock handler answers with.
#[derive(Debug, Clone, PartialEq)]
pub enum MockResponse {
    /// A regular HTTP reply.
    Reply {
        status: StatusCode,
        headers: HeaderMap,
        body: Option<serde_json::Value>,
    },
    /// A broken transport: the client never receives a complete response.
    NetworkFailure,
}

impl MockResponse {
    /// JSON reply with `status`.
    #[must_use]
    pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => Self::Reply {
                status,
                headers: HeaderMap::new(),
                body: Some(value),
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize mock response body");
                Self::error(StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::internal())
            }
        }
    }

    /// 200 OK with a JSON body.
    #[must_use]
    pub fn ok<T: Serialize>(body: &T) -> Self {
        Self::json(StatusCode::OK, body)
    }

    /// Error reply carrying the standard error body.
    #[must_use]
    pub fn error(status: StatusCode, body: ErrorBody) -> Self {
        let value = match serde_json::to_value(&body) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    code = %body.error.code,
                    "Failed to serialize error body"
                );
                None
            }
        };
        Self::Reply {
            status,
            headers: HeaderMap::new(),
            body: value,
        }
    }

    /// 204 No Content.
    #[must_use]
    pub fn no_content() -> Self {
        Self::Reply {
            status: StatusCode::NO_CONTENT,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Adds a header; no-op on a network failure.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        if let Self::Reply { headers, .. } = &mut self {
            headers.insert(name, value);
        }
        self
    }

    /// Status code, or `None` for a network failure.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Reply { status, .. } => Some(*status),
            Self::NetworkFailure => None,
        }
    }

    #[must_use]
    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Reply { body, .. } => body.as_ref(),
            Self::NetworkFailure => None,
        }
    }

    #[must_use]
    pub fn header(&self, name: &HeaderName) -> Option<&HeaderValue> {
        match self {
            Self::Reply { headers, .. } => headers.get(name),
            Self::NetworkFailure => None,
        }
    }
}
