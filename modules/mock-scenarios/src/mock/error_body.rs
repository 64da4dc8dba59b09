//! Structured error body shared by simulated and real mock failures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Machine-readable error codes.
pub mod codes {
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const RATE_LIMIT: &str = "RATE_LIMIT";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const UNKNOWN_SCENARIO: &str = "UNKNOWN_SCENARIO";
}

/// `{ success: false, error: { code, message, details? } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    /// Field name to messages; also carries `retryAfter` for rate limits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorBody {
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: BTreeMap<String, Vec<String>>) -> Self {
        self.error.details = Some(details);
        self
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::new(codes::INTERNAL_ERROR, "Internal server error")
    }

    #[must_use]
    pub fn rate_limit(retry_after_secs: u64) -> Self {
        Self::new(
            codes::RATE_LIMIT,
            format!("Too many requests, retry after {retry_after_secs} seconds"),
        )
        .with_details(BTreeMap::from([(
            "retryAfter".to_owned(),
            vec![retry_after_secs.to_string()],
        )]))
    }

    #[must_use]
    pub fn validation(details: BTreeMap<String, Vec<String>>) -> Self {
        Self::new(codes::VALIDATION_ERROR, "Validation failed").with_details(details)
    }

    #[must_use]
    pub fn not_found(resource: &str, id: &str) -> Self {
        Self::new(codes::NOT_FOUND, format!("{resource} not found: {id}"))
    }

    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(codes::BAD_REQUEST, message)
    }
}

/// Accumulates field-level validation messages.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_owned()).or_default().push(message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_body(self) -> ErrorBody {
        ErrorBody::validation(self.0)
    }
}
