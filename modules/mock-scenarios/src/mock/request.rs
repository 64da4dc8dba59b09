use std::collections::HashMap;

use axum::body::Bytes;
use axum::http::Method;
use serde::de::DeserializeOwned;

use crate::domain::scenario::Scenario;

/// The parts of an HTTP request a mock handler may look at.
#[derive(Debug, Clone)]
pub struct MockRequest {
    pub method: Method,
    pub path_params: HashMap<String, String>,
    /// Raw query string without the leading `?`.
    pub query: String,
    pub body: Bytes,
    /// Scenario active when the request was dispatched.
    pub scenario: Scenario,
}

impl MockRequest {
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            path_params: HashMap::new(),
            query: String::new(),
            body: Bytes::new(),
            scenario: Scenario::Success,
        }
    }

    #[must_use]
    pub fn with_param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.path_params.insert(name.to_owned(), value.into());
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn with_json(mut self, body: &serde_json::Value) -> Self {
        self.body = Bytes::from(body.to_string());
        self
    }

    /// Path parameter by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.path_params.get(name).map(String::as_str)
    }

    /// Decodes the query string.
    ///
    /// # Errors
    /// Returns an error if the query does not match `T`.
    pub fn query_as<T: DeserializeOwned>(&self) -> Result<T, serde_urlencoded::de::Error> {
        serde_urlencoded::from_str(&self.query)
    }

    /// Decodes the JSON body; an empty body decodes as `null`.
    ///
    /// # Errors
    /// Returns an error if the body is not valid JSON for `T`.
    pub fn body_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        if self.body.is_empty() {
            serde_json::from_value(serde_json::Value::Null)
        } else {
            serde_json::from_slice(&self.body)
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Paging {
        page: Option<u32>,
        limit: Option<u32>,
        search: Option<String>,
    }

    #[test]
    fn query_is_decoded() {
        let req = MockRequest::new(Method::GET).with_query("page=2&limit=5&search=red%20mug");
        let paging: Paging = req.query_as().unwrap();
        assert_eq!(
            paging,
            Paging {
                page: Some(2),
                limit: Some(5),
                search: Some("red mug".to_owned()),
            }
        );
    }

    #[test]
    fn empty_body_decodes_as_null() {
        let req = MockRequest::new(Method::POST);
        let value: Option<serde_json::Value> = req.body_as().unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn path_params_are_looked_up_by_name() {
        let req = MockRequest::new(Method::GET).with_param("id", "42");
        assert_eq!(req.param("id"), Some("42"));
        assert_eq!(req.param("other"), None);
    }
}
