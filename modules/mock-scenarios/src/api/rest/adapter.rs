//! axum glue for [`MockHandler`]s.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::{Path, RawQuery};
use axum::http::{HeaderValue, Method, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{MethodFilter, MethodRouter, on};
use futures::stream;

use crate::domain::scenario::Scenario;
use crate::mock::request::MockRequest;
use crate::mock::response::MockResponse;
use crate::mock::wrapper::MockHandler;

/// Route `handler` for the methods in `filter`.
///
/// Path parameters, the raw query and the raw body are copied into a
/// [`MockRequest`]; decoding is left to the handler so that scenario
/// short-circuits take precedence over malformed input.
pub fn endpoint<H>(filter: MethodFilter, handler: Arc<H>) -> MethodRouter
where
    H: MockHandler + ?Sized + 'static,
{
    on(
        filter,
        move |method: Method,
              Path(path_params): Path<HashMap<String, String>>,
              RawQuery(query): RawQuery,
              body: Bytes| {
            let handler = Arc::clone(&handler);
            async move {
                let request = MockRequest {
                    method,
                    path_params,
                    query: query.unwrap_or_default(),
                    body,
                    scenario: Scenario::default(),
                };
                handler.handle(request).await.into_response()
            }
        },
    )
}

impl IntoResponse for MockResponse {
    fn into_response(self) -> Response {
        match self {
            MockResponse::Reply {
                status,
                headers,
                body,
            } => {
                let mut response = match body {
                    Some(body) => Json(body).into_response(),
                    None => Response::new(Body::empty()),
                };
                *response.status_mut() = status;
                response.headers_mut().extend(headers);
                response
            }
            MockResponse::NetworkFailure => network_failure(),
        }
    }
}

/// A response whose body fails before any byte is produced; hyper aborts the
/// connection, so clients observe a transport error instead of a status.
fn network_failure() -> Response {
    let body = Body::from_stream(stream::once(async {
        Err::<Bytes, std::io::Error>(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "simulated network failure",
        ))
    }));
    let mut response = Response::new(body);
    response
        .headers_mut()
        .insert(header::CONNECTION, HeaderValue::from_static("close"));
    response
}
